// Driver tests: tick semantics, reconfiguration, clamping, commands

use sortty::buffer::{Order, WorkingBuffer};
use sortty::driver::constants::{MAX_BARS, MAX_TICK_RATE, MIN_BARS, MIN_TICK_RATE};
use sortty::driver::{Command, Driver, RunState, Settings, Status};
use sortty::sorting::{Algorithm, Progress};
use std::ops::ControlFlow;

fn scripted(values: &[u32], algorithm: Algorithm) -> Driver {
    Driver::from_buffer(
        WorkingBuffer::from_values(values.to_vec(), Order::Ascending),
        algorithm,
        1,
    )
}

/// Tick until the session completes, returning the number of progressed ticks
fn run_to_end(driver: &mut Driver) -> usize {
    driver.set_playing(true);
    let mut steps = 0;
    loop {
        match driver.tick() {
            Some(Progress::Progressed(_)) => steps += 1,
            Some(Progress::Completed) => return steps,
            None => panic!("driver stopped before completing"),
        }
        assert!(steps < 1_000_000, "run did not terminate");
    }
}

fn is_permutation_of(values: &[u32], original: &[u32]) -> bool {
    let mut a = values.to_vec();
    let mut b = original.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[test]
fn test_tick_does_nothing_until_playing() {
    let mut driver = scripted(&[5, 3, 4, 1, 2], Algorithm::Bubble);
    assert_eq!(driver.state(), RunState::Idle);
    assert_eq!(driver.tick(), None);
    assert_eq!(driver.buffer().values(), &[5, 3, 4, 1, 2]);
    assert!(!driver.has_session());
}

#[test]
fn test_completion_reports_sorted_and_stops() {
    let mut driver = scripted(&[5, 3, 4, 1, 2], Algorithm::Bubble);
    assert_eq!(run_to_end(&mut driver), 8);

    assert_eq!(driver.status(), Status::Sorted);
    assert_eq!(driver.state(), RunState::Idle);
    assert_eq!(driver.steps(), 8);
    assert!(!driver.has_session());
    assert_eq!(driver.tick(), None);
}

#[test]
fn test_pause_keeps_the_session() {
    let mut driver = scripted(&[5, 3, 4, 1, 2], Algorithm::Insertion);
    driver.set_playing(true);
    driver.tick();
    driver.tick();
    assert_eq!(driver.status(), Status::InProgress);

    driver.set_playing(false);
    assert_eq!(driver.state(), RunState::Paused);
    assert_eq!(driver.tick(), None);
    assert!(driver.has_session());

    // resuming continues where it left off
    assert_eq!(run_to_end(&mut driver), 6);
    assert_eq!(driver.steps(), 8);
    assert_eq!(driver.buffer().values(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_switching_algorithm_mid_run_restarts_from_partial_state() {
    let mut driver = scripted(&[5, 3, 4, 1, 2], Algorithm::Bubble);
    driver.set_playing(true);
    for _ in 0..3 {
        assert!(matches!(driver.tick(), Some(Progress::Progressed(_))));
    }
    assert_eq!(driver.buffer().values(), &[3, 4, 1, 5, 2]);

    driver.select_algorithm(Algorithm::Insertion);
    assert_eq!(driver.state(), RunState::Idle);
    assert!(!driver.has_session());
    assert_eq!(driver.buffer().values(), &[3, 4, 1, 5, 2]);

    let inversions = driver.buffer().inversions();
    assert_eq!(inversions, 5);
    assert_eq!(run_to_end(&mut driver), inversions);
    assert_eq!(driver.buffer().values(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_order_flip_mid_run() {
    let original = [9, 2, 7, 4, 5, 1, 8];
    let mut driver = scripted(&original, Algorithm::Merge);
    driver.set_playing(true);
    for _ in 0..5 {
        driver.tick();
    }

    driver.set_order(Order::Descending);
    assert_eq!(driver.state(), RunState::Idle);
    assert!(is_permutation_of(driver.buffer().values(), &original));

    run_to_end(&mut driver);
    assert_eq!(driver.buffer().values(), &[9, 8, 7, 5, 4, 2, 1]);
}

#[test]
fn test_every_switch_still_sorts() {
    let original: Vec<u32> = vec![12, 3, 9, 14, 1, 7, 7, 2, 11, 5, 16, 4];
    for first in Algorithm::ALL {
        if first == Algorithm::Crazy {
            continue;
        }
        let seconds = [
            Algorithm::Bubble,
            Algorithm::Merge,
            Algorithm::Quick,
            Algorithm::Selection,
        ];
        for second in seconds {
            let mut driver = scripted(&original, first);
            driver.set_playing(true);
            for _ in 0..7 {
                driver.tick();
            }
            driver.select_algorithm(second);
            run_to_end(&mut driver);
            assert!(driver.buffer().is_sorted(), "{} -> {}", first, second);
            assert!(is_permutation_of(driver.buffer().values(), &original));
        }
    }
}

#[test]
fn test_reset_regenerates_and_stops() {
    let mut driver = Driver::new(Settings {
        bars: 16,
        seed: 4,
        ..Settings::default()
    });
    let before = driver.buffer().values().to_vec();
    driver.set_playing(true);
    driver.tick();

    driver.reset();
    assert_eq!(driver.state(), RunState::Idle);
    assert_eq!(driver.status(), Status::Ready);
    assert_eq!(driver.steps(), 0);
    assert_eq!(driver.buffer().len(), 16);
    assert_ne!(driver.buffer().values(), before.as_slice());
}

#[test]
fn test_resize_clamps_and_regenerates() {
    let mut driver = Driver::new(Settings {
        bars: 64,
        seed: 2,
        ..Settings::default()
    });
    driver.set_playing(true);
    driver.tick();

    assert_eq!(driver.grow(), 128);
    assert_eq!(driver.state(), RunState::Idle);
    assert_eq!(driver.grow(), MAX_BARS);
    assert_eq!(driver.grow(), MAX_BARS);
    assert_eq!(driver.buffer().len(), MAX_BARS);

    assert_eq!(driver.resize(1), MIN_BARS);
    assert_eq!(driver.shrink(), MIN_BARS);
    assert_eq!(driver.buffer().len(), MIN_BARS);

    run_to_end(&mut driver);
    assert!(driver.buffer().is_sorted());
}

#[test]
fn test_startup_settings_are_clamped() {
    let driver = Driver::new(Settings {
        bars: 10_000,
        tick_rate: 1,
        ..Settings::default()
    });
    assert_eq!(driver.buffer().len(), MAX_BARS);
    assert_eq!(driver.tick_rate(), MIN_TICK_RATE);
}

#[test]
fn test_tick_rate_does_not_touch_the_session() {
    let mut driver = scripted(&[5, 3, 4, 1, 2], Algorithm::Selection);
    driver.set_playing(true);
    driver.tick();

    assert_eq!(driver.faster(), 128);
    assert_eq!(driver.faster(), MAX_TICK_RATE);
    assert_eq!(driver.faster(), MAX_TICK_RATE);
    assert_eq!(driver.set_tick_rate(0), MIN_TICK_RATE);
    assert_eq!(driver.slower(), MIN_TICK_RATE);

    assert!(driver.is_running());
    assert!(driver.has_session());
    assert_eq!(run_to_end(&mut driver), 3);
}

#[test]
fn test_same_seed_same_run() {
    let settings = Settings {
        bars: 32,
        algorithm: Algorithm::Quick,
        seed: 77,
        ..Settings::default()
    };
    let mut a = Driver::new(settings.clone());
    let mut b = Driver::new(settings);
    assert_eq!(a.buffer().values(), b.buffer().values());

    a.set_playing(true);
    b.set_playing(true);
    loop {
        let step_a = a.tick();
        assert_eq!(step_a, b.tick());
        assert_eq!(a.buffer().values(), b.buffer().values());
        if step_a == Some(Progress::Completed) {
            break;
        }
    }
}

#[test]
fn test_crazy_sort_runs_under_the_driver() {
    let mut driver = scripted(&[3, 1, 2, 4], Algorithm::Crazy);
    run_to_end(&mut driver);
    assert_eq!(driver.buffer().values(), &[1, 2, 3, 4]);
    assert_eq!(driver.status(), Status::Sorted);
}

#[test]
fn test_apply_commands() {
    let mut driver = scripted(&[5, 3, 4, 1, 2], Algorithm::Bubble);

    assert_eq!(driver.apply(Command::TogglePlay), ControlFlow::Continue(()));
    assert!(driver.is_running());
    assert_eq!(driver.apply(Command::TogglePlay), ControlFlow::Continue(()));
    assert_eq!(driver.state(), RunState::Paused);

    driver.apply(Command::Select(Algorithm::Merge));
    assert_eq!(driver.algorithm(), Algorithm::Merge);

    driver.apply(Command::SetOrder(Order::Descending));
    assert_eq!(driver.order(), Order::Descending);

    driver.apply(Command::Slower);
    assert_eq!(driver.tick_rate(), 32);

    driver.apply(Command::Grow);
    assert_eq!(driver.buffer().len(), 10);

    assert_eq!(driver.apply(Command::Quit), ControlFlow::Break(()));
}

#[test]
fn test_snapshot_reflects_driver_state() {
    let mut driver = scripted(&[2, 1, 3, 4], Algorithm::Bubble);
    let snapshot = driver.snapshot();
    assert_eq!(snapshot.values, &[2, 1, 3, 4]);
    assert_eq!(snapshot.bars, 4);
    assert_eq!(snapshot.message(), "Ready!");
    assert!(snapshot.highlighted().is_empty());

    driver.set_playing(true);
    driver.tick();
    let snapshot = driver.snapshot();
    assert!(snapshot.is_playing());
    assert_eq!(snapshot.highlighted(), vec![0, 1]);
    assert_eq!(snapshot.message(), "Sorting...");

    driver.tick();
    let snapshot = driver.snapshot();
    assert_eq!(snapshot.message(), "Sorted");
    assert!(!snapshot.is_playing());
}
