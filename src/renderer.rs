/*
 * Renderer Module
 *
 * This module handles the rendering of the simulation. It reads each boid's
 * position and heading from the core, maps world coordinates (origin at the
 * bottom-left of the plane) to nannou's centered screen space, and draws an
 * oriented triangle per boid plus an optional debug overlay.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::world::WorldBounds;
use crate::BOID_SIZE;

// World coordinates are [0, width) x [0, height) with y up; nannou's origin
// is the window center
fn world_to_screen(position: crate::Vector2, bounds: WorldBounds) -> Point2 {
    pt2(
        (position.x - bounds.width / 2.0) as f32,
        (position.y - bounds.height / 2.0) as f32,
    )
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    let bounds = model.flock.bounds();

    // Draw each boid
    for boid in model.flock.boids() {
        draw_boid(&draw, boid, bounds);
    }

    // Draw debug visualization if enabled
    if model.params.show_debug {
        draw_debug_overlay(&draw, model, bounds);
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// Draw a single boid as a triangle pointing along its heading
fn draw_boid(draw: &Draw, boid: &Boid, bounds: WorldBounds) {
    let points = [
        pt2(BOID_SIZE, 0.0),
        pt2(-BOID_SIZE, BOID_SIZE / 2.0),
        pt2(-BOID_SIZE, -BOID_SIZE / 2.0),
    ];

    draw.polygon()
        .color(rgb::<u8>(220, 220, 220))
        .points(points)
        .xy(world_to_screen(boid.position, bounds))
        .rotate(boid.heading() as f32);
}

fn draw_debug_overlay(draw: &Draw, model: &Model, bounds: WorldBounds) {
    // Draw the rule radii around the first boid
    if let Some(first_boid) = model.flock.boids().first() {
        let center = world_to_screen(first_boid.position, bounds);

        // Separation radius
        draw.ellipse()
            .xy(center)
            .radius(model.params.separation_radius as f32)
            .no_fill()
            .stroke(RED)
            .stroke_weight(1.0);

        // Perception radius (cohesion and alignment)
        draw.ellipse()
            .xy(center)
            .radius(model.params.perception_radius as f32)
            .no_fill()
            .stroke(BLUE)
            .stroke_weight(1.0);

        // Velocity vector
        let velocity_tip = pt2(
            center.x + first_boid.velocity.x as f32 * 5.0,
            center.y + first_boid.velocity.y as f32 * 5.0,
        );
        draw.arrow()
            .start(center)
            .end(velocity_tip)
            .color(YELLOW)
            .stroke_weight(2.0);
    }

    // Draw FPS and other debug info
    let text_x = (-bounds.width / 2.0) as f32 + 100.0;
    let text_y = (bounds.height / 2.0) as f32;

    draw.text(&format!("FPS: {:.1}", model.debug_info.fps))
        .x_y(text_x, text_y - 20.0)
        .color(WHITE)
        .font_size(14);

    draw.text(&format!(
        "Frame time: {:.2} ms",
        model.debug_info.frame_time.as_secs_f64() * 1000.0
    ))
    .x_y(text_x, text_y - 40.0)
    .color(WHITE)
    .font_size(14);

    draw.text(&format!("Boids: {}", model.flock.boids().len()))
        .x_y(text_x, text_y - 60.0)
        .color(WHITE)
        .font_size(14);

    draw.text(&format!("World: {:.0}x{:.0}", bounds.width, bounds.height))
        .x_y(text_x, text_y - 80.0)
        .color(WHITE)
        .font_size(14);
}
