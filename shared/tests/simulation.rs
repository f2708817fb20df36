use shared::{Event, Simulation};

/// Drives the simulation with a frozen clock until every rocket has
/// detonated, collecting the emitted events.
fn run_until_rockets_clear(simulation: &mut Simulation) -> Vec<Event> {
    let mut events = Vec::new();

    let mut ticks = 0;
    while !simulation.rockets.is_empty() {
        events.extend(simulation.update(0.0));

        ticks += 1;
        assert!(ticks < 500, "rockets never cleared");
    }

    events
}

#[test]
fn click_spawns_one_rocket_towards_the_click() {
    let mut simulation = Simulation::new(1000.0, 800.0, 7);

    simulation.launch_at(500.0, 300.0);

    assert_eq!(simulation.rockets.len(), 1);

    let rocket = &simulation.rockets[0];
    assert_eq!((rocket.x, rocket.y), (500.0, 800.0));
    assert_eq!((rocket.tx, rocket.ty), (500.0, 300.0));
}

#[test]
fn detonation_leaves_one_flash_and_a_burst_of_fresh_particles() {
    let mut simulation = Simulation::new(1000.0, 800.0, 7);

    simulation.launch_at(500.0, 300.0);
    let events = run_until_rockets_clear(&mut simulation);

    assert_eq!(
        events,
        vec![Event::Explosion { x: 500.0, y: 300.0 }]
    );

    assert_eq!(simulation.flashes.len(), 1);
    assert_eq!(
        (simulation.flashes[0].x, simulation.flashes[0].y),
        (500.0, 300.0)
    );

    assert!((80..=120).contains(&simulation.particles.len()));

    for particle in &simulation.particles {
        assert_eq!((particle.x, particle.y), (500.0, 300.0));
        assert_eq!(particle.life, 1.0);
    }
}

#[test]
fn burst_shares_a_hue_within_twenty_degrees_of_its_base() {
    let mut simulation = Simulation::new(1000.0, 800.0, 1234);

    simulation.launch_at(640.0, 120.0);
    run_until_rockets_clear(&mut simulation);

    let hues: Vec<f64> = simulation.particles.iter().map(|p| p.hue).collect();
    assert!(!hues.is_empty());

    let lowest = hues.iter().cloned().fold(f64::INFINITY, f64::min);
    let highest = hues.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Jitter is drawn from plus or minus twenty degrees around one base.
    assert!(highest - lowest <= 40.0);

    for particle in &simulation.particles {
        assert!((50.0..70.0).contains(&particle.lightness));
    }
}

#[test]
fn auto_launch_groups_follow_the_cadence() {
    let mut simulation = Simulation::new(1000.0, 800.0, 21);

    simulation.update(1000.0);
    let first_group = simulation.rockets.len();
    assert!(first_group == 2 || first_group == 3);

    // 399 ms later: still inside the interval, no new group.
    simulation.update(1399.0);
    assert_eq!(simulation.rockets.len(), first_group);

    // The 400 ms boundary itself launches.
    simulation.update(1400.0);
    let second_group = simulation.rockets.len() - first_group;
    assert!(second_group == 2 || second_group == 3);
}

#[test]
fn auto_launched_rockets_target_the_upper_half() {
    let mut simulation = Simulation::new(1000.0, 800.0, 3);

    for round in 0..8 {
        simulation.update(1000.0 + 400.0 * round as f64);
    }

    assert!(!simulation.rockets.is_empty());

    for rocket in &simulation.rockets {
        assert!((0.0..1000.0).contains(&rocket.tx));
        assert!((80.0..480.0).contains(&rocket.ty));
    }
}

#[test]
fn resize_does_not_rescale_entities_in_flight() {
    let mut simulation = Simulation::new(1000.0, 800.0, 11);

    simulation.launch_at(500.0, 300.0);
    simulation.update(0.0);

    let before: Vec<(f64, f64)> = simulation.rockets.iter().map(|r| (r.x, r.y)).collect();

    simulation.resize(640.0, 480.0);

    let after: Vec<(f64, f64)> = simulation.rockets.iter().map(|r| (r.x, r.y)).collect();
    assert_eq!(before, after);

    // New launches start from the new bottom edge.
    simulation.launch_at(100.0, 50.0);
    assert_eq!(simulation.rockets.last().unwrap().y, 480.0);
}
