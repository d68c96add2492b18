//! Chalkline is a whiteboard reveal scheduling engine.
//!
//! Chalkline turns a static vector drawing (an ordered set of typed shapes)
//! into a time-indexed animation plan: per-element reveal descriptors (stroke
//! draw, fill, text typing, freehand progression, pointer motion) with
//! absolute start/end timestamps, optionally re-timed against a measured
//! voice-narration track.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `Drawing -> ordered elements` (total deterministic order)
//! 2. **Collect**: `ordered elements -> AnimationGroups` (coordinated units)
//! 3. **Allocate**: `groups + config -> Timeline + AnimationDescriptors`
//! 4. **Synchronize** (optional): re-bucket the schedule onto measured
//!    [`NarrationSegment`]s
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: planning is pure and stable for a given
//!   input; ties are never resolved by unspecified iteration order.
//! - **No IO**: parsing documents, generating audio and rendering frames are
//!   external collaborators; this crate only schedules.
//! - **Tolerant input, strict config**: malformed geometry defaults safely,
//!   while configuration misuse fails validation before any allocation.
//!
//! # Getting started
//!
//! Build a [`Drawing`] (see [`DrawingBuilder`]) and call [`plan_animation`]
//! or [`plan_animation_with_narration`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod document;
mod foundation;
mod geometry;
mod plan;

pub use document::config::PlanConfig;
pub use document::dsl::{DrawingBuilder, ElementBuilder};
pub use document::model::{Drawing, DrawingElement, ElementKind};
pub use foundation::core::{BezPath, Point, Rect, TimeMs, TimeSpan, Vec2, div_round};
pub use foundation::error::{ChalklineError, ChalklineResult};
pub use geometry::outline::{
    DEFAULT_EXTENT, absolute_points, element_bounds, element_outline, polyline_progress,
    svg_path_d,
};
pub use plan::allocate::{Timeline, allocate};
pub use plan::descriptor::{AnimationDescriptor, RevealOp, describe};
pub use plan::fingerprint::{PlanFingerprint, fingerprint_plan};
pub use plan::groups::{AnimationGroup, collect_groups};
pub use plan::narration::{NarrationSegment, clamp_speed_factor, synchronize};
pub use plan::order::resolve_order;
pub use plan::pipeline::{AnimationPlan, plan_animation, plan_animation_with_narration};
