use std::fmt::Write as _;

use crate::foundation::core::{Canvas, Rgba8};
use crate::render::fonts::FONT_FAMILY;
use crate::render::plan::{DrawOp, FontWeight, RenderPlan, TextAnchor, TextOp};

/// Serialize a plan as a standalone SVG document.
pub fn render_svg(plan: &RenderPlan) -> String {
    let mut out = String::new();
    open_document(&mut out, plan.canvas);
    write_rect(
        &mut out,
        0.0,
        0.0,
        f64::from(plan.canvas.width),
        f64::from(plan.canvas.height),
        plan.background,
    );
    for op in &plan.ops {
        write_op(&mut out, op);
    }
    out.push_str("</svg>\n");
    out
}

/// Serialize only the text ops of a plan over a transparent background.
///
/// Returns `None` when the plan has no text.
pub(crate) fn text_overlay_svg(plan: &RenderPlan) -> Option<String> {
    let mut texts = plan.texts().peekable();
    texts.peek()?;

    let mut out = String::new();
    open_document(&mut out, plan.canvas);
    for t in texts {
        write_text(&mut out, t);
    }
    out.push_str("</svg>\n");
    Some(out)
}

fn open_document(out: &mut String, canvas: Canvas) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    );
}

fn write_op(out: &mut String, op: &DrawOp) {
    match op {
        DrawOp::FillRect { rect, color } => {
            write_rect(out, rect.x0, rect.y0, rect.width(), rect.height(), *color)
        }
        DrawOp::Stroke { path, color, width } => {
            if path.elements().is_empty() {
                return;
            }
            let _ = writeln!(
                out,
                r#"<path d="{}" fill="none" stroke="{}"{} stroke-width="{:.3}" stroke-linejoin="round"/>"#,
                path.to_svg(),
                rgb(*color),
                opacity_attr("stroke-opacity", *color),
                width
            );
        }
        DrawOp::Text(t) => write_text(out, t),
    }
}

fn write_rect(out: &mut String, x: f64, y: f64, w: f64, h: f64, color: Rgba8) {
    let _ = writeln!(
        out,
        r#"<rect x="{x:.3}" y="{y:.3}" width="{w:.3}" height="{h:.3}" fill="{}"{}/>"#,
        rgb(color),
        opacity_attr("fill-opacity", color)
    );
}

fn write_text(out: &mut String, t: &TextOp) {
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let weight = match t.weight {
        FontWeight::Normal => "normal",
        FontWeight::SemiBold => "600",
    };
    // baseline shift so `pos` is the vertical center of the glyph box
    let baseline = t.pos.y + 0.35 * t.size;
    let transform = if t.rotate_deg != 0.0 {
        format!(
            r#" transform="rotate({:.3} {:.3} {:.3})""#,
            t.rotate_deg, t.pos.x, t.pos.y
        )
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        r#"<text x="{:.3}" y="{:.3}" font-family="{}" font-size="{:.3}" font-weight="{}" fill="{}"{} text-anchor="{}"{}>{}</text>"#,
        t.pos.x,
        baseline,
        FONT_FAMILY,
        t.size,
        weight,
        rgb(t.color),
        opacity_attr("fill-opacity", t.color),
        anchor,
        transform,
        escape_xml(&t.text)
    );
}

fn rgb(c: Rgba8) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

fn opacity_attr(name: &str, c: Rgba8) -> String {
    if c.a == 255 {
        String::new()
    } else {
        format!(r#" {name}="{:.3}""#, c.alpha_f64())
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
