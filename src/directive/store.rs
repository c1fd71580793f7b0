//! Directive store: the pure transition function and its owning wrapper

use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord, FieldUpdate, Payload};
use super::bundle::DirectiveBundle;
use super::errors::{ErrorPolicy, RangedField};
use super::state::DirectiveConfig;
use super::validation;

/// Behaviour switches for the transition function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreOptions {
    /// How validated actions update the error map (default: replace)
    #[serde(default)]
    pub error_policy: ErrorPolicy,

    /// Accept `mp4` as an output format
    #[serde(default)]
    pub allow_video_output: bool,
}

/// Apply `action` to `state` with default options
pub fn apply(state: &DirectiveConfig, action: &Action) -> DirectiveConfig {
    apply_with(state, action, &StoreOptions::default())
}

/// Compute the next snapshot. Never fails: rejected values are recorded in
/// the error map and the previous value is kept.
pub fn apply_with(
    state: &DirectiveConfig,
    action: &Action,
    options: &StoreOptions,
) -> DirectiveConfig {
    match action {
        Action::SetField(update) => apply_field(state, *update, options),
        Action::SetCompression(payload) => {
            apply_ranged(state, RangedField::Compression, payload, options)
        }
        Action::SetSharpness(payload) => {
            apply_ranged(state, RangedField::Sharpness, payload, options)
        }
        Action::SetRotate(payload) => apply_ranged(state, RangedField::Rotate, payload, options),
        Action::SetScaleToScreenWidth(payload) => {
            apply_ranged(state, RangedField::ScaleToScreenWidth, payload, options)
        }
        Action::SetNoOptimization(payload) => DirectiveConfig {
            no_optimization: matches!(payload, Payload::Text(s) if s == "true"),
            ..state.clone()
        },
    }
}

fn apply_field(
    state: &DirectiveConfig,
    update: FieldUpdate,
    options: &StoreOptions,
) -> DirectiveConfig {
    if let FieldUpdate::OutputFormat(format) = update {
        if format.is_video() && !options.allow_video_output {
            tracing::warn!(
                output_format = %format,
                "Video output not enabled, ignoring format change"
            );
            return state.clone();
        }
    }

    tracing::trace!(field = update.field_name(), "Unchecked field write");

    let mut next = state.clone();
    match update {
        FieldUpdate::Width(v) => next.width = v,
        FieldUpdate::Height(v) => next.height = v,
        FieldUpdate::AutoWidthWithFallback(v) => next.auto_width_with_fallback = v,
        FieldUpdate::OutputFormat(v) => next.output_format = v,
        FieldUpdate::FitMethod(v) => next.fit_method = v,
        FieldUpdate::CropWidth(v) => next.crop_width = v,
        FieldUpdate::CropHeight(v) => next.crop_height = v,
        FieldUpdate::CropLeft(v) => next.crop_left = v,
        FieldUpdate::CropTop(v) => next.crop_top = v,
        FieldUpdate::Crop(v) => next.crop = v,
    }
    next.error = state.error.after_unchecked(options.error_policy);
    next
}

fn apply_ranged(
    state: &DirectiveConfig,
    field: RangedField,
    payload: &Payload,
    options: &StoreOptions,
) -> DirectiveConfig {
    let mut next = state.clone();
    match validation::check(field, payload) {
        Ok(value) => {
            // check() guarantees value lies inside the field's interval
            match field {
                RangedField::Rotate => next.rotate = value,
                RangedField::ScaleToScreenWidth => next.scale_to_screen_width = value,
                RangedField::Compression => next.compression = value as u8,
                RangedField::Sharpness => next.sharpness = value as u8,
            }
            next.error = state.error.record(options.error_policy, field, false);
        }
        Err(e) => {
            tracing::warn!(field = %field, payload = %payload, error = %e, "Directive rejected");
            next.error = state.error.record(options.error_policy, field, true);
        }
    }
    next
}

/// Owns the session's current snapshot
#[derive(Debug, Clone)]
pub struct DirectiveStore {
    initial: DirectiveConfig,
    state: DirectiveConfig,
    options: StoreOptions,
    generation: u64,
}

impl Default for DirectiveStore {
    fn default() -> Self {
        Self::new(DirectiveConfig::default(), StoreOptions::default())
    }
}

impl DirectiveStore {
    pub fn new(initial: DirectiveConfig, options: StoreOptions) -> Self {
        Self {
            state: initial.clone(),
            initial,
            options,
            generation: 0,
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> &DirectiveConfig {
        &self.state
    }

    /// Number of actions applied since creation or the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bundle derived from the current snapshot
    pub fn bundle(&self) -> DirectiveBundle {
        DirectiveBundle::from(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) -> &DirectiveConfig {
        self.state = apply_with(&self.state, &action, &self.options);
        self.generation += 1;
        tracing::debug!(
            action = action.kind().as_str(),
            generation = self.generation,
            errors = self.state.error.any_flagged(),
            "Directive action applied"
        );
        &self.state
    }

    /// Resolve and dispatch a dynamic record. Unresolvable records leave the
    /// snapshot untouched.
    pub fn dispatch_record(&mut self, record: &ActionRecord) -> &DirectiveConfig {
        match record.resolve() {
            Some(action) => self.dispatch(action),
            None => {
                tracing::debug!(
                    action = record.kind.as_str(),
                    field = record.field_name.as_deref().unwrap_or(""),
                    payload = %record.payload,
                    "Ignoring unresolvable action"
                );
                &self.state
            }
        }
    }

    /// Return to the session's initial snapshot
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.generation = 0;
    }
}
