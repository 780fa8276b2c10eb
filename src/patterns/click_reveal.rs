use crate::core::{Direction, Vec2, Viewport};
use crate::directive::{
    AnimatedAttribute, AnimationDirective, CalcMode, DirectiveBuilder, Fill, Repeat, Trigger,
};
use crate::ease::Ease;
use crate::error::RondoResult;
use crate::model::{HotArea, Slide};
use crate::patterns::{Choreography, Layer, normalized_slides};
use crate::timeline::{Timeline, TimelineSegment};

/// A static backdrop plus overlays that slide in when their hot area is
/// clicked.
///
/// Each overlay group carries an invisible rect at the hot area; the rect
/// keeps its authored position while the image waits offstage, so it stays
/// clickable until the reveal fires. Overlays with no hot area of their own
/// get the whole frame. Reveals are independent of each other and freeze in
/// place once played.
pub fn choreograph(slides: &[Slide], viewport: Viewport) -> RondoResult<Choreography> {
    let slides = normalized_slides(slides)?;
    let mut layers = Vec::with_capacity(slides.len());
    layers.push(Layer::new("backdrop", &slides[0].url));
    for (i, slide) in slides.iter().enumerate().skip(1) {
        let travel = slide.direction.unwrap_or(Direction::Down).travel(viewport);
        let mut layer = Layer::new(format!("reveal-{i}"), &slide.url);
        layer.base_offset = -travel;
        layer.hot_area = slide.hot_area.or(Some(HotArea {
            x: 0.0,
            y: 0.0,
            width: viewport.width,
            height: viewport.height,
        }));
        layer.directives.push(reveal_directive(slide, travel)?);
        layers.push(layer);
    }
    Ok(Choreography { viewport, layers })
}

fn reveal_directive(slide: &Slide, travel: Vec2) -> RondoResult<AnimationDirective> {
    let enter = slide.enter_seconds.unwrap_or(0.5);
    let easing = slide.easing.unwrap_or(Ease::SHARP);
    let keyframes = Timeline::new(Vec2::ZERO)
        .then(TimelineSegment::eased(enter, travel, easing))
        .compile()?;
    DirectiveBuilder::new(AnimatedAttribute::Translate, keyframes, enter)
        .calc_mode(CalcMode::Spline)
        .repeat(Repeat::Once)
        .trigger(Trigger::OnClick)
        .fill(Fill::Freeze)
        .additive(true)
        .build()
}
