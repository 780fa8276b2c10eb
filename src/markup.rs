use crate::core::fmt_num;
use crate::directive::{AnimatedAttribute, AnimationDirective};
use crate::error::{RondoError, RondoResult};
use crate::patterns::{Choreography, Layer};

/// Which element inside a layer group each attribute is allowed to animate.
/// Opacity and transform land on the group; geometry lands on the image.
const ANIMATABLE: &[(AnimatedAttribute, &str)] = &[
    (AnimatedAttribute::Opacity, "g"),
    (AnimatedAttribute::Translate, "g"),
    (AnimatedAttribute::X, "image"),
    (AnimatedAttribute::Y, "image"),
    (AnimatedAttribute::Width, "image"),
    (AnimatedAttribute::Height, "image"),
];

fn target_element(attribute: AnimatedAttribute) -> RondoResult<&'static str> {
    ANIMATABLE
        .iter()
        .find(|(candidate, _)| *candidate == attribute)
        .map(|(_, element)| *element)
        .ok_or_else(|| {
            RondoError::configuration(format!(
                "attribute {:?} has no animatable target element",
                attribute
            ))
        })
}

/// Serialize a choreography as a self-contained SVG document.
///
/// Everything the playback needs rides in declarative animation elements,
/// so the output runs with scripting disabled. Attribute order inside each
/// element is fixed, which keeps the document byte-stable across runs for
/// one input.
#[tracing::instrument(skip(plan), fields(layers = plan.layers.len()))]
pub fn render_document(plan: &Choreography) -> RondoResult<String> {
    plan.validate()?;
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" width=\"100%\">\n",
        fmt_num(plan.viewport.width),
        fmt_num(plan.viewport.height),
    ));
    for layer in &plan.layers {
        render_layer(&mut out, layer, plan)?;
    }
    out.push_str("</svg>\n");
    Ok(out)
}

fn render_layer(out: &mut String, layer: &Layer, plan: &Choreography) -> RondoResult<()> {
    let mut image_directives = Vec::new();
    let mut group_directives = Vec::new();
    for directive in &layer.directives {
        match target_element(directive.attribute)? {
            "image" => image_directives.push(directive),
            _ => group_directives.push(directive),
        }
    }

    out.push_str(&format!("  <g data-name=\"{}\"", xml_escape(&layer.label)));
    if let Some(opacity) = layer.base_opacity {
        out.push_str(&format!(" opacity=\"{}\"", fmt_num(opacity)));
    }
    out.push_str(">\n");

    let image_open = format!(
        "    <image href=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
         preserveAspectRatio=\"xMidYMid slice\"",
        xml_escape(&layer.url),
        fmt_num(layer.base_offset.x),
        fmt_num(layer.base_offset.y),
        fmt_num(plan.viewport.width),
        fmt_num(plan.viewport.height),
    );
    if image_directives.is_empty() {
        out.push_str(&image_open);
        out.push_str("/>\n");
    } else {
        out.push_str(&image_open);
        out.push_str(">\n");
        for directive in image_directives {
            render_directive(out, directive, "      ");
        }
        out.push_str("    </image>\n");
    }

    if let Some(area) = layer.hot_area {
        out.push_str(&format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#fff\" opacity=\"0.001\"/>\n",
            fmt_num(area.x),
            fmt_num(area.y),
            fmt_num(area.width),
            fmt_num(area.height),
        ));
    }

    for directive in group_directives {
        render_directive(out, directive, "    ");
    }
    out.push_str("  </g>\n");
    Ok(())
}

fn render_directive(out: &mut String, directive: &AnimationDirective, indent: &str) {
    out.push_str(indent);
    if directive.attribute.is_transform() {
        out.push_str("<animateTransform attributeName=\"transform\" type=\"translate\"");
    } else {
        out.push_str(&format!(
            "<animate attributeName=\"{}\"",
            directive.attribute.attribute_name()
        ));
    }
    out.push_str(&format!(" values=\"{}\"", directive.keyframes.values_attr()));
    out.push_str(&format!(
        " keyTimes=\"{}\"",
        directive.keyframes.key_times_attr()
    ));
    if directive.emits_key_splines() {
        out.push_str(&format!(
            " keySplines=\"{}\"",
            directive.keyframes.key_splines_attr()
        ));
    }
    if let Some(begin) = directive.begin_attr() {
        out.push_str(&format!(" begin=\"{begin}\""));
    }
    out.push_str(&format!(" dur=\"{}\"", directive.dur_attr()));
    out.push_str(&format!(" calcMode=\"{}\"", directive.calc_mode.attr()));
    out.push_str(&format!(" repeatCount=\"{}\"", directive.repeat_attr()));
    out.push_str(&format!(" fill=\"{}\"", directive.fill.attr()));
    if directive.additive {
        out.push_str(" additive=\"sum\"");
    }
    out.push_str("/>\n");
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
