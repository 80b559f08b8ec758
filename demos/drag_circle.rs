// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drags the edge and then the center of a circle, and prints the result as
//! an HTML page. Run with `RUST_LOG=trace` to see the drag lifecycle.

use circle_limit::{
    CircleModel, CircleWidget, ControlPoint, DrawingSurface, Point, PointerEvent, SvgSurface,
    Vec2, WidgetStyle,
};

fn main() {
    env_logger::init();

    let mut surface = SvgSurface::new(400.0, 400.0);
    let mut widget = CircleWidget::new(
        &mut surface,
        CircleModel::new((200.0, 200.0), 100.0),
        &WidgetStyle::default(),
    );

    // Grab the edge handle where it was drawn and pull it down.
    let edge = surface
        .hit_test(Point::new(300.0, 200.0))
        .expect("edge handle is under the pointer");
    assert_eq!(widget.control_point(edge), Some(ControlPoint::Edge));
    let gesture = [
        PointerEvent::Down(edge),
        PointerEvent::Drag(edge, Vec2::new(0.0, 50.0)),
        PointerEvent::Drag(edge, Vec2::new(0.0, 100.0)),
        PointerEvent::Up(edge),
    ];
    for event in gesture {
        widget
            .handle_event(&mut surface, event)
            .expect("finite drag deltas");
    }

    // Then move the whole circle by its center.
    let center = widget.handle(ControlPoint::Center);
    widget.pointer_down(center);
    widget
        .drag(&mut surface, center, (50.0, -20.0))
        .expect("finite drag deltas");
    widget.pointer_up(center);

    let model = widget.model();
    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    println!(
        "<p>center {:.1}, edge {:.1}, radius {:.3}</p>",
        model.center(),
        model.edge(),
        model.radius()
    );
    println!("{surface}");
    println!("</body>");
    println!("</html>");
}
