//! Half-filtering tests - lower_half / upper_half over landed distributions

use bean_counter::core::{Bean, BeanRng, Machine};
use bean_counter::types::Mode;

const BEAN_COUNTS: [usize; 5] = [0, 1, 2, 21, 200];

fn finished_luck_machine(slot_count: usize, bean_count: usize, seed: u64) -> Machine {
    let mut rng = BeanRng::new(seed);
    let mut machine = Machine::new(slot_count);
    machine.reset(Bean::batch(bean_count, slot_count, Mode::Luck, &mut rng));
    machine.run_to_completion();
    machine
}

/// Keep `ceil(T / 2)` beans, filling from the slots visited first.
fn expected_after_keep(counts: &[usize], order: impl Iterator<Item = usize>) -> Vec<usize> {
    let total: usize = counts.iter().sum();
    let mut keep = total - total / 2;
    let mut expected = vec![0; counts.len()];
    for i in order {
        let kept = counts[i].min(keep);
        expected[i] = kept;
        keep -= kept;
    }
    expected
}

#[test]
fn test_lower_half() {
    for (seed, bean_count) in BEAN_COUNTS.into_iter().enumerate() {
        let mut machine = finished_luck_machine(10, bean_count, seed as u64);
        let counts = machine.slot_bean_counts();
        let expected = expected_after_keep(&counts, 0..counts.len());

        let removed = machine.lower_half();
        assert_eq!(removed, bean_count / 2);
        assert_eq!(machine.slot_bean_counts(), expected, "{} beans", bean_count);
    }
}

#[test]
fn test_upper_half() {
    for (seed, bean_count) in BEAN_COUNTS.into_iter().enumerate() {
        let mut machine = finished_luck_machine(10, bean_count, 100 + seed as u64);
        let counts = machine.slot_bean_counts();
        let expected = expected_after_keep(&counts, (0..counts.len()).rev());

        let removed = machine.upper_half();
        assert_eq!(removed, bean_count / 2);
        assert_eq!(machine.slot_bean_counts(), expected, "{} beans", bean_count);
    }
}

#[test]
fn test_odd_total_keeps_the_extra_bean() {
    let mut machine = finished_luck_machine(4, 3, 8);
    machine.lower_half();
    assert_eq!(machine.landed_bean_count(), 2);

    let mut machine = finished_luck_machine(4, 3, 8);
    machine.upper_half();
    assert_eq!(machine.landed_bean_count(), 2);
}

#[test]
fn test_filtering_ignores_beans_still_in_play() {
    let mut rng = BeanRng::new(17);
    let mut machine = Machine::new(5);
    machine.reset(Bean::batch(20, 5, Mode::Luck, &mut rng));
    for _ in 0..10 {
        machine.advance_step();
    }

    let waiting = machine.remaining_bean_count();
    let in_flight = machine.in_flight_bean_count();
    let landed = machine.landed_bean_count();

    machine.upper_half();
    assert_eq!(machine.remaining_bean_count(), waiting);
    assert_eq!(machine.in_flight_bean_count(), in_flight);
    assert_eq!(machine.landed_bean_count(), landed - landed / 2);
    assert_eq!(machine.loaded_bean_count(), 20 - landed / 2);
}

#[test]
fn test_repeat_after_filter_only_reuses_kept_beans() {
    let mut machine = finished_luck_machine(10, 200, 3);
    machine.lower_half();
    assert_eq!(machine.landed_bean_count(), 100);

    machine.repeat();
    assert_eq!(machine.total_bean_count(), 100);
    machine.run_to_completion();
    assert_eq!(machine.landed_bean_count(), 100);
}

#[test]
fn test_repeated_filtering_converges_to_one_bean() {
    let mut machine = finished_luck_machine(10, 200, 4);
    let mut total = machine.landed_bean_count();
    while total > 1 {
        machine.lower_half();
        let next = machine.landed_bean_count();
        assert_eq!(next, total - total / 2);
        total = next;
    }
    assert_eq!(machine.lower_half(), 0);
    assert_eq!(machine.landed_bean_count(), 1);
}
