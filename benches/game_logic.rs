use criterion::{black_box, criterion_group, criterion_main, Criterion};
use puyo::core::{Field, Grid};
use puyo::engine::ai::{Ai, RandomAi, RuleBasedAi};
use puyo::types::GameAction;

/// Reds pop, then the blues they were holding up
const CHAIN_ROWS: [&str; 4] = [
    "B.....", //
    "R.....", //
    "RB....", //
    "RRBB..", //
];

fn bench_drop_cycle(c: &mut Criterion) {
    let mut field = Field::with_seed(14, 6, 12345);
    field.start();

    c.bench_function("drop_and_respawn", |b| {
        b.iter(|| {
            if field.is_game_over() {
                field = Field::with_seed(14, 6, 12345);
                field.start();
            }
            field.apply_action(black_box(GameAction::Drop));
        })
    });
}

fn bench_resolve_chain(c: &mut Criterion) {
    let template = Grid::from_rows(14, 6, &CHAIN_ROWS);

    c.bench_function("resolve_chain", |b| {
        b.iter(|| {
            let mut field = Field::new(14, 6);
            *field.grid_mut() = template.clone();
            black_box(field.resolve_chain());
        })
    });
}

fn bench_gravity(c: &mut Criterion) {
    c.bench_function("gravity_checkerboard", |b| {
        b.iter(|| {
            let mut grid = Grid::new(14, 6);
            for y in (0..14).step_by(2) {
                for x in 0..6 {
                    let _ = grid.set(x, y, puyo::types::Cell::Garbage);
                }
            }
            black_box(grid.apply_gravity());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut field = Field::with_seed(14, 6, 12345);
    field.start();

    c.bench_function("move_right", |b| {
        b.iter(|| {
            if !field.move_right() {
                while field.move_left() {}
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut field = Field::with_seed(14, 6, 12345);
    field.start();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            field.rotate_cw();
        })
    });
}

fn bench_ai_decide(c: &mut Criterion) {
    let mut field = Field::with_seed(14, 6, 12345);
    field.start();
    for _ in 0..6 {
        field.apply_action(GameAction::Drop);
        field.apply_action(GameAction::MoveLeft);
    }

    let mut random = RandomAi::new(7);
    c.bench_function("random_ai_decide", |b| {
        b.iter(|| black_box(random.decide(&field)))
    });

    let mut rule = RuleBasedAi::default();
    c.bench_function("rule_based_ai_decide", |b| {
        b.iter(|| black_box(rule.decide(&field)))
    });

    let mut deep = RuleBasedAi::default().with_lookahead(1);
    c.bench_function("rule_based_ai_decide_lookahead_1", |b| {
        b.iter(|| black_box(deep.decide(&field)))
    });
}

criterion_group!(
    benches,
    bench_drop_cycle,
    bench_resolve_chain,
    bench_gravity,
    bench_try_move,
    bench_try_rotate,
    bench_ai_decide
);
criterion_main!(benches);
