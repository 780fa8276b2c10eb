//! Rondo compiles image-slideshow choreography into self-contained SVG/SMIL
//! markup.
//!
//! The output is a static document: every loop, stagger, handoff and click
//! response is expressed with declarative animation elements, so it plays
//! with scripting disabled and cannot be corrected after the fact.
//!
//! # Pipeline overview
//!
//! 1. **Model**: a [`Storyboard`] names a pattern, a viewport and the slides
//! 2. **Schedule**: an [`Ensemble`] of actors is laid out over one shared cycle
//! 3. **Compile**: typed [`Timeline`]s become [`KeyframeSet`]s, wrapped into
//!    [`AnimationDirective`]s
//! 4. **Emit**: the layered [`Choreography`] is serialized by
//!    [`render_document`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: one storyboard yields one byte-exact
//!   document; [`fingerprint_plan`] witnesses that.
//! - **No second chance**: phase offsets, loop-seam masking and keyframe
//!   hygiene are all established at compile time.
//!
//! # Getting started
//!
//! - For end-user usage, see the repository README.
//! - For a detailed, standalone walkthrough of the API and architecture, see
//!   [`crate::guide`].
#![forbid(unsafe_code)]

pub mod core;
pub mod directive;
pub mod dsl;
pub mod ease;
pub mod error;
pub mod fingerprint;
pub mod ghost;
pub mod guide;
pub mod imgsize;
pub mod markup;
pub mod model;
pub mod patterns;
pub mod pipeline;
pub mod schedule;
pub mod timeline;

pub use crate::core::{Direction, Vec2, Viewport, fmt_num};
pub use directive::{
    AnimatedAttribute, AnimationDirective, CalcMode, DirectiveBuilder, Fill, Repeat, Trigger,
};
pub use dsl::{SlideBuilder, StoryboardBuilder};
pub use ease::Ease;
pub use error::{RondoError, RondoResult};
pub use fingerprint::{PlanFingerprint, fingerprint_plan};
pub use ghost::GhostLayer;
pub use imgsize::{ProbeStatus, SizeProbe, probe_size};
pub use markup::render_document;
pub use model::{HotArea, PatternSpec, Slide, Storyboard};
pub use patterns::{Choreography, Layer};
pub use pipeline::{compile_storyboard, plan_storyboard, resolve_viewport};
pub use schedule::{Actor, ActorWindow, Ensemble, EnsembleSchedule};
pub use timeline::{KeyframeSet, Timeline, TimelineSegment};
