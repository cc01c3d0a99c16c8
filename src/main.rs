//! Tank Skirmish headless driver
//!
//! Runs both scenes through the fixed-timestep runner with jittered frame
//! times and logs what happens. Set `RUST_LOG=info` (or `debug`) to see
//! the event stream. An optional first argument names a JSON tuning file.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    env_logger::init();
    log::info!("Tank Skirmish (native) starting...");

    let tuning_path = std::env::args().nth(1).map(PathBuf::from);
    let tuning = tank_skirmish::Tuning::load_or_default(tuning_path.as_deref());

    headless::run_duel(&tuning);
    headless::run_skirmish(&tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation core has no web front end
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use tank_skirmish::Tuning;
    use tank_skirmish::consts::SIM_DT;
    use tank_skirmish::sim::{Duel, FixedStep, Runner, Scene, Skirmish, UnitId};

    const SEED: u64 = 0x7a6e_6b73;
    /// Give up after this much simulated wall time
    const TIME_LIMIT: f32 = 120.0;

    /// Frame times between roughly 30 and 144 FPS
    fn frame_dt(rng: &mut Pcg32) -> f32 {
        rng.random_range(0.007..0.034)
    }

    /// Drive the pump until `done` says stop or time runs out.
    /// Returns the simulated wall time spent.
    fn pump<S: Scene>(
        runner: &mut Runner<S>,
        rng: &mut Pcg32,
        mut done: impl FnMut(&Runner<S>) -> bool,
    ) -> f32 {
        let mut elapsed = 0.0;
        let mut frames = 0u32;
        let mut ticks = 0u32;
        while elapsed < TIME_LIMIT && !done(runner) {
            let dt = frame_dt(rng);
            ticks += runner.frame(dt);
            elapsed += dt;
            frames += 1;
        }
        log::debug!("{frames} frames, {ticks} ticks, {elapsed:.2}s");
        elapsed
    }

    /// Fire straight at the target and report the hit
    pub fn run_duel(tuning: &Tuning) {
        let mut rng = Pcg32::seed_from_u64(SEED);
        let mut runner = Runner::new(Duel::new(tuning), FixedStep::new(SIM_DT));

        runner.input_mut().fire = true;
        let elapsed = pump(&mut runner, &mut rng, |r| !r.scene().target_alive);

        if runner.scene().target_alive {
            log::warn!("Duel: target survived {elapsed:.2}s");
        } else {
            log::info!("Duel: target destroyed after {elapsed:.2}s");
        }
    }

    /// Send the first tank toward the second until one of them falls
    pub fn run_skirmish(tuning: &Tuning) {
        let mut rng = Pcg32::seed_from_u64(SEED);
        let mut runner = Runner::new(Skirmish::new(tuning), FixedStep::new(SIM_DT));

        let (attacker, defender) = {
            let scene = runner.scene();
            match (scene.tank(UnitId(0)), scene.tank(UnitId(1))) {
                (Some(a), Some(b)) => (a.position(), b.position()),
                _ => return,
            }
        };
        // Stop short of the defender, well inside engagement range
        let approach = defender + (attacker - defender).normalize_or(Vec2::X) * 400.0;
        let input = runner.input_mut();
        input.select = Some(attacker);
        input.move_to = Some(approach);

        let elapsed = pump(&mut runner, &mut rng, |r| {
            let scene = r.scene();
            !scene.is_alive(UnitId(0)) || !scene.is_alive(UnitId(1))
        });

        let scene = runner.scene();
        let alive = [scene.is_alive(UnitId(0)), scene.is_alive(UnitId(1))];
        log::info!(
            "Skirmish after {elapsed:.2}s: unit 0 {}, unit 1 {}",
            if alive[0] { "alive" } else { "destroyed" },
            if alive[1] { "alive" } else { "destroyed" },
        );

        match serde_json::to_string(&runner.snapshot()) {
            Ok(json) => log::debug!("Final snapshot: {json}"),
            Err(e) => log::warn!("Could not serialize snapshot: {e}"),
        }
    }
}
