use solar_viewer::orbits::kepler::{orbital_radius, solve_kepler};
use solar_viewer::orbits::{CartesianPosition, OrbitalElements};

#[test]
fn unit_circle_reference_point() {
    let p = OrbitalElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0).to_cartesian();
    assert_eq!(p, CartesianPosition::new(1.0, 0.0, 0.0));
}

#[test]
fn radius_stays_between_periapsis_and_apoapsis() {
    for &a in &[0.4, 1.0, 2.77, 30.0] {
        for step in 0..=9 {
            let e = step as f64 * 0.1;
            for ma in (0..360).step_by(15) {
                let elements = OrbitalElements::new(a, e, 12.0, 80.0, 73.0, ma as f64);
                let r = elements.to_cartesian().magnitude();
                let tol = 1e-9 * a;
                assert!(
                    r >= a * (1.0 - e) - tol && r <= a * (1.0 + e) + tol,
                    "a={a} e={e} ma={ma} r={r}"
                );
            }
        }
    }
}

#[test]
fn circular_orbits_keep_constant_distance() {
    for ma in (0..360).step_by(7) {
        let elements = OrbitalElements::new(5.2, 0.0, 1.3, 100.5, 273.9, ma as f64);
        let r = elements.to_cartesian().magnitude();
        assert!((r - 5.2).abs() < 1e-12, "ma={ma} r={r}");
    }
}

#[test]
fn solver_is_bit_for_bit_deterministic() {
    let elements = OrbitalElements::new(1.4579, 0.2227, 10.828, 304.3, 178.88, 310.55);
    let first = elements.to_cartesian();
    for _ in 0..100 {
        let again = elements.to_cartesian();
        assert_eq!(first.x.to_bits(), again.x.to_bits());
        assert_eq!(first.y.to_bits(), again.y.to_bits());
        assert_eq!(first.z.to_bits(), again.z.to_bits());
    }
}

#[test]
fn magnitude_matches_orbital_radius() {
    let elements = OrbitalElements::new(2.3615, 0.0887, 7.142, 103.81, 151.2, 169.35);
    let ea = solve_kepler(elements.ma.to_radians(), elements.e);
    let r = orbital_radius(elements.a, elements.e, ea);
    assert!((elements.to_cartesian().magnitude() - r).abs() < 1e-12);
    assert_eq!(elements.orbital_radius(), r);
}

#[test]
fn inclination_lifts_body_out_of_ecliptic() {
    // Quarter orbit past the node on a 90° inclined circle lands on +z.
    let p = OrbitalElements::new(1.0, 0.0, 90.0, 0.0, 90.0, 0.0).to_cartesian();
    assert!(p.x.abs() < 1e-12);
    assert!(p.y.abs() < 1e-12);
    assert!((p.z - 1.0).abs() < 1e-12);
}

#[test]
fn high_eccentricity_is_not_fully_converged() {
    // Ten fixed-point iterations leave a visible residual near periapsis at e = 0.95.
    let m = 0.05_f64;
    let e = 0.95;
    let ea = solve_kepler(m, e);
    let residual = (ea - e * ea.sin() - m).abs();
    assert!(residual > 1e-6, "residual={residual}");
}
