use bounty_holdem::agent::{ActionKind, Bot, BountyAgent, HandRecord};
use bounty_holdem::core::{CardBitSet, Rankable, Value, parse_cards};
use bounty_holdem::holdem::MonteCarloEstimator;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

fn bench_estimate_by_street(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_by_street");
    let own = parse_cards("AsKd").unwrap();
    let estimator = MonteCarloEstimator::default();

    for board in ["", "7h2c9s", "7h2c9sTd", "7h2c9sTd3h"] {
        let board_cards = parse_cards(board).unwrap();
        group.bench_with_input(
            BenchmarkId::new("board_cards", board_cards.len()),
            &board_cards,
            |b, board_cards| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| estimator.estimate(&own, board_cards, &mut rng).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_estimate_by_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_by_trials");
    let own = parse_cards("8h8d").unwrap();
    let board = parse_cards("Qc5s2h").unwrap();

    for trials in [10, 100, 1_000] {
        let estimator = MonteCarloEstimator::new(trials, 2).unwrap();
        group.bench_with_input(BenchmarkId::new("trials", trials), &trials, |b, _| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| estimator.estimate(&own, &board, &mut rng).unwrap());
        });
    }
    group.finish();
}

fn bench_rank_seven(c: &mut Criterion) {
    let cards: CardBitSet = parse_cards("AsKdQh7c7d2s9h")
        .unwrap()
        .into_iter()
        .collect();
    c.bench_function("rank_seven_cards", |b| b.iter(|| cards.rank()));
}

fn bench_agent_decision(c: &mut Criterion) {
    let record = HandRecord::builder()
        .own_cards(parse_cards("AsKd").unwrap())
        .board(parse_cards("7h2c9s").unwrap())
        .pips(0, 20)
        .stacks(380, 360, 400)
        .legal(&[ActionKind::Fold, ActionKind::Call, ActionKind::Raise])
        .raise_bounds(40, 360)
        .own_bounty(Value::King)
        .build()
        .unwrap();

    c.bench_function("agent_get_action", |b| {
        let mut agent = BountyAgent::with_seed("bench", 42);
        agent.handle_new_round(1);
        b.iter(|| agent.get_action(&record).unwrap());
    });
}

criterion_group!(
    benches,
    bench_estimate_by_street,
    bench_estimate_by_trials,
    bench_rank_seven,
    bench_agent_decision
);
criterion_main!(benches);
