//! Lowering paths and shape records to SVG elements.  Any scalar type that implements
//! [`Display`] can be lowered; symbolic scalars are rendered with whatever notation their
//! `Display` impl chooses.

use std::fmt::Display;

use itertools::Itertools;
use simple_xml_builder::XMLElement;

use crate::path::PathCommand;
use crate::sample::{Canvas, Paint};
use crate::shape::{AttrValue, ShapeType, ShapeValue};

/// Formats a command sequence as the `d` attribute of an SVG `<path>` element
pub fn path_d<N: Display>(path: &[PathCommand<N>]) -> String {
    path.iter().map(command_string).join(" ")
}

fn command_string<N: Display>(command: &PathCommand<N>) -> String {
    match command {
        PathCommand::MoveTo(end) => format!("M {} {}", end.x, end.y),
        PathCommand::LineTo(end) => format!("L {} {}", end.x, end.y),
        PathCommand::QuadTo { control, end } => {
            format!("Q {} {} {} {}", control.x, control.y, end.x, end.y)
        }
        PathCommand::CubicTo {
            control1,
            control2,
            end,
        } => format!(
            "C {} {} {} {} {} {}",
            control1.x, control1.y, control2.x, control2.y, end.x, end.y
        ),
        PathCommand::QuadJoin { end } => format!("T {} {}", end.x, end.y),
        PathCommand::CubicJoin { control, end } => {
            format!("S {} {} {} {}", control.x, control.y, end.x, end.y)
        }
        PathCommand::ArcTo { params, end } => {
            let [rx, ry, rotation, large_arc, sweep] = params;
            format!(
                "A {} {} {} {} {} {} {}",
                rx, ry, rotation, large_arc, sweep, end.x, end.y
            )
        }
        PathCommand::Close => "Z".to_string(),
    }
}

/// Generates an SVG `<path>` element for a command sequence
pub fn gen_svg_path<N: Display>(path: &[PathCommand<N>]) -> XMLElement {
    let mut elem = XMLElement::new("path");
    elem.add_attribute("d", &path_d(path));
    elem
}

/// Generates an SVG element for a shape record.  Polygon records become `<polygon>` elements
/// with their outline and paint attributes.
pub fn gen_svg_shape<N: Display>(shape: &ShapeValue<N>) -> XMLElement {
    match shape.shape_type() {
        ShapeType::Polygon => gen_svg_polygon(shape),
    }
}

fn gen_svg_polygon<N: Display>(shape: &ShapeValue<N>) -> XMLElement {
    let mut elem = XMLElement::new("polygon");
    if let Some(AttrValue::Points(points)) = shape.get("points") {
        let coord_string = points
            .iter()
            .map(|point| format!("{},{}", point.x, point.y))
            .join(" ");
        elem.add_attribute("points", &coord_string);
    }
    if let Some(AttrValue::Color(paint)) = shape.get("fillColor") {
        elem.add_attribute("fill", &paint_string(paint));
    }
    if let Some(AttrValue::Color(paint)) = shape.get("strokeColor") {
        elem.add_attribute("stroke", &paint_string(paint));
    }
    if let Some(AttrValue::Float(width)) = shape.get("strokeWidth") {
        elem.add_attribute("stroke-width", &width.to_string());
    }
    if let Some(AttrValue::Str(dasharray)) = shape.get("strokeDasharray") {
        if !dasharray.is_empty() {
            elem.add_attribute("stroke-dasharray", dasharray);
        }
    }
    elem
}

fn paint_string(paint: &Paint) -> String {
    match paint {
        Some(color) => color.to_string(),
        None => "none".to_string(),
    }
}

/// Generates the root `<svg>` element, sized to the canvas and containing the given children
pub fn gen_svg_root(canvas: &Canvas, children: Vec<XMLElement>) -> XMLElement {
    let mut root = XMLElement::new("svg");
    root.add_attribute("width", &canvas.width.to_string());
    root.add_attribute("height", &canvas.height.to_string());
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");
    for child in children {
        root.add_child(child);
    }
    root
}
