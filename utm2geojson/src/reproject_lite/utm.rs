//! Projection UTM inverse (Universal Transverse Mercator → géographique)
//!
//! Série de Snyder sur l'ellipsoïde WGS84, précise au millimètre près dans la zone.

use std::f64::consts::PI;

use geo::Coord;

use super::ellipsoid::WGS84;
use super::Geographic;
use crate::projection::{Hemisphere, ProjectionError, Zone};

/// Facteur d'échelle sur le méridien central
const K0: f64 = 0.9996;

/// False easting
const FALSE_EASTING: f64 = 500000.0;

/// False northing de l'hémisphère sud
const FALSE_NORTHING_SOUTH: f64 = 10000000.0;

/// Convertit UTM vers coordonnées géographiques WGS84
pub fn utm_to_geographic(
    x: f64,
    y: f64,
    zone: Zone,
    hemisphere: Hemisphere,
) -> Result<Geographic, ProjectionError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ProjectionError::out_of_domain(Coord { x, y }));
    }

    let a = WGS84::A;
    let e2 = WGS84::E2;
    let ep2 = WGS84::EP2;

    let y0 = match hemisphere {
        Hemisphere::North => 0.0,
        Hemisphere::South => FALSE_NORTHING_SOUTH,
    };

    let lon0 = zone.central_meridian().to_radians();

    // Coordonnées réduites
    let dx = x - FALSE_EASTING;
    let dy = y - y0;

    // Latitude du pied de la perpendiculaire
    let m = dy / K0;
    let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e2.powi(2) / 64.0 - 5.0 * e2.powi(3) / 256.0));

    let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

    // Au-delà du pôle la série n'a plus de sens
    if phi1.abs() >= PI / 2.0 {
        return Err(ProjectionError::out_of_domain(Coord { x, y }));
    }

    let sin_phi1 = phi1.sin();
    let cos_phi1 = phi1.cos();
    let tan_phi1 = phi1.tan();

    let n1 = a / (1.0 - e2 * sin_phi1.powi(2)).sqrt();
    let t1 = tan_phi1.powi(2);
    let c1 = ep2 * cos_phi1.powi(2);
    let r1 = a * (1.0 - e2) / (1.0 - e2 * sin_phi1.powi(2)).powf(1.5);
    let d = dx / (n1 * K0);

    let lat = phi1
        - (n1 * tan_phi1 / r1)
            * (d.powi(2) / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1.powi(2) - 9.0 * ep2) * d.powi(4) / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1.powi(2) - 252.0 * ep2 - 3.0 * c1.powi(2))
                    * d.powi(6)
                    / 720.0);

    let lon = lon0
        + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1.powi(2) + 8.0 * ep2 + 24.0 * t1.powi(2))
                * d.powi(5)
                / 120.0)
            / cos_phi1;

    if !lat.is_finite() || !lon.is_finite() || lat.abs() > PI / 2.0 {
        return Err(ProjectionError::out_of_domain(Coord { x, y }));
    }

    Ok(Geographic::new(wrap_longitude(lon), lat))
}

/// Ramène une longitude (radians) dans [-π, π]
fn wrap_longitude(lon: f64) -> f64 {
    if (-PI..=PI).contains(&lon) {
        lon
    } else {
        (lon + PI).rem_euclid(2.0 * PI) - PI
    }
}
