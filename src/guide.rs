//! # Rondo guide (v0.1.0)
//!
//! This module is a standalone, end-to-end walkthrough of Rondo's architecture and public API.
//! It is intentionally detailed so future patterns (and external integrations) can build on a
//! shared mental model of what "a compile" means in this codebase.
//!
//! If you are looking for copy/paste commands, start with the repository `README.md`.
//! If you are implementing new patterns, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Storyboard`](crate::Storyboard): the input (a pattern choice plus a list of slides)
//! - [`Ensemble`](crate::Ensemble): the ordered cast sharing one animation cycle
//! - [`EnsembleSchedule`](crate::EnsembleSchedule): each actor's window laid head to tail
//! - [`Timeline`](crate::Timeline): typed value-over-time segments, compiled to keyframes
//! - [`KeyframeSet`](crate::KeyframeSet): values / keyTimes / keySplines, ready for markup
//! - [`AnimationDirective`](crate::AnimationDirective): one animation element, fully resolved
//! - [`Choreography`](crate::Choreography): the layered scene, in paint order
//! - [`PlanFingerprint`](crate::PlanFingerprint): identity of a plan, usable as a cache key
//!
//! The compile pipeline is explicitly staged:
//!
//! 1. Plan the scene: [`plan_storyboard`](crate::plan_storyboard) (schedule + pattern layout)
//! 2. Serialize the scene: [`render_document`](crate::render_document)
//!
//! The convenience wrapper for (1)+(2) is [`compile_storyboard`](crate::compile_storyboard).
//!
//! ---
//!
//! ## "No scripts in the output" (and why)
//!
//! Rondo's output is one self-contained SVG document. There is no runtime: no script tags, no
//! timers, no DOM mutation after load. Every loop, stagger, handoff, and click response is
//! expressed with declarative animation elements (`<animate>`, `<animateTransform>`), so the
//! document plays anywhere SMIL plays, including contexts where scripting is stripped.
//!
//! That constraint shapes the whole design. Things a runtime would do imperatively are encoded
//! up front:
//!
//! - loops are `repeatCount="indefinite"` over one shared cycle duration
//! - "this actor acts late in the round" is a flat span in its `keyTimes`, not a delayed callback
//! - "already mid-flight when the document loads" is a negative `begin`
//! - "stay where you ended" is `fill="freeze"`
//! - "wait for the user" is `begin="click"` on the layer group
//!
//! ---
//!
//! ## The wrap seam and the ghost layer
//!
//! Exit-style patterns (cover-out, fade, hard cut) stack every image at load and peel the top
//! one off in turn. All layers start their cycle together; an actor's turn lives entirely in
//! its keyframe windows. When the cycle wraps, every frozen exit snaps back to its initial
//! value at the same instant.
//!
//! The snap itself is invisible (each actor is either covered or about to be), except for one
//! frame-level seam: during the last actor's exit there is nothing left underneath, and at the
//! wrap the stack reappears fully assembled. To keep the backdrop from flashing through during
//! that tail window, the planner synthesizes a ghost: a bottom copy of the image that crosses
//! the cycle boundary, flipped visible for exactly the last exit via a discrete two-step
//! opacity jump. [`ghost::synthesize`](crate::ghost::synthesize) returns `None` whenever the
//! schedule ends with no exit, in which case no seam exists.
//!
//! Entry-style patterns (cover-in, push) never need a ghost: their one-shot first-pass layers
//! freeze at rest and double as the backdrop the loop re-enters over.
//!
//! ---
//!
//! ## Keyframe hygiene
//!
//! SMIL is strict about `keyTimes`: the list must start at 0, end at 1, and strictly increase.
//! Rondo compiles timelines under those rules:
//!
//! - times are rounded to six decimals, the precision the document prints
//! - zero-duration segments (instant jumps, back-to-back holds) are bumped forward by the
//!   smallest step that survives printing, then the tail is re-pinned to 1
//! - a timeline whose total duration is zero is a hard error, not a division by zero
//!
//! Compilation is pure. One storyboard yields one byte-exact document, every time, and
//! [`fingerprint_plan`](crate::fingerprint_plan) hashes the plan so callers can cache or
//! deduplicate outputs without diffing markup.
//!
//! ---
//!
//! ## Viewport resolution
//!
//! An explicit [`Viewport`](crate::Viewport) wins. Without one, the first slide is probed for
//! its intrinsic pixel size ([`probe_size`](crate::probe_size)); remote and inline sources
//! cannot be measured at compile time and leave the surface zero-sized. Travel distances are
//! always the crossed dimension plus one unit, so offscreen really means offscreen even at a
//! degenerate zero viewport.
//!
//! ---
//!
//! ## Building a storyboard (Rust DSL)
//!
//! JSON is supported via Serde and is the CLI's input format. For programmatic usage, prefer
//! the builder DSL:
//!
//! ```rust,no_run
//! use rondo::{
//!     Direction, PatternSpec, SlideBuilder, StoryboardBuilder, Viewport, compile_storyboard,
//! };
//!
//! # fn main() -> rondo::RondoResult<()> {
//! let storyboard = StoryboardBuilder::new(PatternSpec::CoverOut)
//!     .viewport(Viewport {
//!         width: 640.0,
//!         height: 360.0,
//!     })
//!     .slide(
//!         SlideBuilder::new("first.png")
//!             .direction(Direction::Left)
//!             .build()?,
//!     )
//!     .slide(
//!         SlideBuilder::new("second.png")
//!             .stay_seconds(2.0)
//!             .build()?,
//!     )
//!     .build()?;
//!
//! let svg = compile_storyboard(&storyboard)?;
//! println!("{svg}");
//! # Ok(())
//! # }
//! ```
//!
//! Notes:
//!
//! - [`Storyboard::validate`](crate::Storyboard::validate) is called by the builder.
//! - Unset per-slide fields fall back to the active pattern's documented defaults.
//! - A single-slide storyboard plays against a copy of itself, so every pattern is total.
