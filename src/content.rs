//! Demo world content: runways, houses, lakes and an optional dot grid.
//!
//! This is plain data assembly. Everything is built once and handed to the
//! engine as an immutable [`Scene`].

use crate::config::Palette;
use crate::error::{Error, Result};
use crate::scene::{Point3, Polygon, Polyline, Scene};

/// Runway width in metres.
const RUNWAY_WIDTH: f32 = 75.0;
/// Length of one asphalt polygon.
const RUNWAY_SEGMENT: f32 = 100.0;
/// Spacing of centreline stripes; each stripe covers the middle half.
const STRIPE_SPACING: f32 = 40.0;
const STRIPE_WIDTH: f32 = 1.0;

/// Maps a point given along/across a runway to the world, rotating by
/// `orientation` about the threshold at (`north`, `east`).
fn runway_point(north: f32, east: f32, orientation: f32, along: f32, across: f32) -> Point3 {
    let (sin, cos) = orientation.sin_cos();
    Point3::new(
        along * cos - across * sin + north,
        along * sin + across * cos + east,
        0.0,
    )
}

/// A runway of `length` metres starting at (`north`, `east`) and running along
/// `orientation` radians: outline, asphalt segments and centreline stripes.
pub fn runway(
    palette: &Palette,
    length: f32,
    north: f32,
    east: f32,
    orientation: f32,
) -> Result<Scene> {
    let at = |along: f32, across: f32| runway_point(north, east, orientation, along, across);
    let half = RUNWAY_WIDTH / 2.0;
    let segments = (length / RUNWAY_SEGMENT).round().max(1.0) as usize;
    let stripes = (length / STRIPE_SPACING).round() as usize;
    let full = segments as f32 * RUNWAY_SEGMENT;

    let mut scene = Scene::new();

    let outline = vec![
        at(0.0, -half),
        at(full, -half),
        at(full, half),
        at(0.0, half),
        at(0.0, -half),
    ];
    scene.add_polyline(Polyline::new(palette.stripe, outline)?);

    for i in 0..segments {
        let start = i as f32 * RUNWAY_SEGMENT;
        let end = start + RUNWAY_SEGMENT;
        scene.add_polygon(Polygon::from_ring(
            palette.runway,
            vec![at(start, -half), at(end, -half), at(end, half), at(start, half)],
        )?);
    }

    let stripe_half = STRIPE_WIDTH / 2.0;
    for i in 0..stripes {
        let start = i as f32 * STRIPE_SPACING + STRIPE_SPACING * 0.25;
        let end = i as f32 * STRIPE_SPACING + STRIPE_SPACING * 0.75;
        scene.add_polygon(Polygon::from_ring(
            palette.stripe,
            vec![
                at(start, -stripe_half),
                at(end, -stripe_half),
                at(end, stripe_half),
                at(start, stripe_half),
            ],
        )?);
    }

    Ok(scene)
}

/// A box-shaped house: base and roof outlines plus the vertical edges not
/// already drawn by the outline chain.
pub fn building(palette: &Palette, north: f32, east: f32, size: f32, height: f32) -> Result<Scene> {
    let corner = |dn: f32, de: f32, up: f32| Point3::new(north + dn, east + de, up);
    let mut scene = Scene::new();

    scene.add_polyline(Polyline::new(
        palette.building,
        vec![
            corner(0.0, 0.0, 0.0),
            corner(size, 0.0, 0.0),
            corner(size, size, 0.0),
            corner(0.0, size, 0.0),
            corner(0.0, 0.0, 0.0),
            corner(0.0, 0.0, height),
            corner(size, 0.0, height),
            corner(size, size, height),
            corner(0.0, size, height),
            corner(0.0, 0.0, height),
        ],
    )?);
    for (dn, de) in [(size, 0.0), (size, size), (0.0, size)] {
        scene.add_polyline(Polyline::new(
            palette.building,
            vec![corner(dn, de, 0.0), corner(dn, de, height)],
        )?);
    }

    Ok(scene)
}

/// A small hexagonal lake and a large rectangular one.
pub fn lakes(palette: &Palette) -> Result<Scene> {
    let ring = |points: &[(f32, f32)]| -> Result<Polygon> {
        Polygon::from_ring(
            palette.lake,
            points.iter().map(|&(n, e)| Point3::new(n, e, 0.0)).collect(),
        )
    };
    let mut scene = Scene::new();
    scene.add_polygon(ring(&[
        (-1500.0, 0.0),
        (-1500.0, 200.0),
        (-1400.0, 300.0),
        (-1300.0, 200.0),
        (-1300.0, 0.0),
        (-1400.0, -100.0),
    ])?);
    scene.add_polygon(ring(&[
        (-2500.0, -5000.0),
        (2500.0, -5000.0),
        (2500.0, -7500.0),
        (-2500.0, -7500.0),
    ])?);
    Ok(scene)
}

/// Ground-level dots on major grid lines every `major` metres, spaced `minor`
/// metres along each line, covering `-extent..extent` in both axes.
///
/// Both spacings must be non-zero.
pub fn ground_grid(extent: i32, minor: usize, major: usize) -> Result<Scene> {
    if minor == 0 || major == 0 {
        return Err(Error::InvalidGeometry(format!(
            "grid spacing must be non-zero, got minor={minor} major={major}"
        )));
    }
    let mut scene = Scene::new();
    for a in (-extent..extent).step_by(major) {
        for b in (-extent..extent).step_by(minor) {
            scene.add_dot(Point3::new(a as f32, b as f32, 0.0));
            scene.add_dot(Point3::new(b as f32, a as f32, 0.0));
        }
    }
    Ok(scene)
}

/// The demo world: lakes, four runways, a row of houses and a skyscraper.
///
/// Polygons are drawn in insertion order, so lakes go in first.
pub fn demo_world(palette: &Palette, with_grid: bool) -> Result<Scene> {
    use std::f32::consts::{FRAC_PI_4, FRAC_PI_8, PI};

    let mut scene = lakes(palette)?;
    scene.extend(runway(palette, 3000.0, 0.0, 0.0, 0.0)?);
    scene.extend(runway(palette, 3000.0, 0.0, -1500.0, FRAC_PI_4)?);
    scene.extend(runway(palette, 2000.0, 5000.0, 7500.0, PI)?);
    scene.extend(runway(palette, 2000.0, -5000.0, 2500.0, FRAC_PI_8)?);
    for i in 1..6 {
        scene.extend(building(palette, 200.0 + i as f32 * 200.0, 150.0, 50.0, 30.0)?);
    }
    scene.extend(building(palette, -2000.0, -2000.0, 100.0, 750.0)?);
    if with_grid {
        scene.extend(ground_grid(40_000, 200, 2000)?);
    }
    Ok(scene)
}
