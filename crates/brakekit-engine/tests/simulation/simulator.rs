use brakekit_core::{BendConvention, BendPlan, MaterialSpec};
use brakekit_engine::{BendPhase, BendSimulator, FlipMode, SimulationState};

const TICK: f64 = 1.0 / 30.0;

fn channel_simulator() -> BendSimulator {
    BendSimulator::new(
        BendPlan::stock_channel(MaterialSpec::default()),
        BendConvention::default(),
    )
    .unwrap()
}

#[test]
fn test_simulator_creation() {
    let sim = channel_simulator();
    assert_eq!(sim.state(), SimulationState::Idle);
    assert_eq!(sim.active_bend(), 0);
    assert_eq!(sim.progress(), 0.0);
}

#[test]
fn test_simulator_start_pause_resume() {
    let mut sim = channel_simulator();

    sim.start();
    assert_eq!(sim.state(), SimulationState::Running);

    sim.pause();
    assert_eq!(sim.state(), SimulationState::Paused);

    sim.resume();
    assert_eq!(sim.state(), SimulationState::Running);
}

#[test]
fn test_simulator_reset() {
    let mut sim = channel_simulator();
    sim.start();
    sim.advance(0.4);
    sim.reset();
    assert_eq!(sim.state(), SimulationState::Idle);
    assert_eq!(sim.progress(), 0.0);
}

#[test]
fn test_clocked_run_closes_every_bend() {
    let mut sim = channel_simulator().with_flip(FlipMode::Auto);

    for bend in 0..sim.bend_count() {
        sim.select_bend(bend).unwrap();
        sim.start();

        let mut angles = vec![sim.frame().unwrap().current_angle];
        let mut ticks = 0;
        while sim.state() == SimulationState::Running {
            sim.advance(TICK);
            angles.push(sim.frame().unwrap().current_angle);
            ticks += 1;
            assert!(ticks <= 40, "bend {} never completed", bend);
        }

        assert_eq!(sim.phase(), BendPhase::Bent);
        assert!(angles.windows(2).all(|w| w[1] < w[0]));
        let target = sim.plan().steps[sim.frame().unwrap().step_index].angle;
        assert_eq!(angles.last().copied(), Some(target));
    }
}

#[test]
fn test_frames_for_harness() {
    let sim = channel_simulator();
    let frames = sim.frames(11).unwrap();
    assert_eq!(frames.len(), 11);
    assert_eq!(frames.first().unwrap().current_angle, 180.0);
    assert_eq!(frames.last().unwrap().current_angle, 90.0);
    assert!(frames
        .iter()
        .all(|f| f.polygon.first() == f.polygon.last()));
}
