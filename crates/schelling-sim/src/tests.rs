//! Integration tests for schelling-sim.

use schelling_agent::{AgentRngs, AgentSpec, AgentStore, AgentStoreBuilder, Influence, Role};
use schelling_behavior::{NoopBehavior, SchellingBehavior};
use schelling_core::{AgentId, GroupId, Pos, SimConfig, Tick};
use schelling_grid::SingleGrid;

use crate::{
    ModelParams, NoopObserver, SchellingModel, Sim, SimBuilder, SimError, SimObserver, StepStats,
    populate,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_steps: u64) -> SimConfig {
    SimConfig {
        total_steps,
        seed:                  42,
        output_interval_steps: 0,
        stop_when_settled:     false,
    }
}

/// Board from a picture; same legend as the behavior tests.
///   `a`/`b` residents of group 0/1, `P`/`N` positive/negative influencers
///   of group 0, `.` empty.  Row `i` is `y = i`.
fn board(rows: &[&str], tolerance: u8) -> (SingleGrid, AgentStore, AgentRngs) {
    let mut grid = SingleGrid::new(rows[0].len() as u32, rows.len() as u32, false).unwrap();
    let mut builder = AgentStoreBuilder::new(9);
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let pos = Pos::new(x as u32, y as u32);
            let spec = match c {
                'a' => AgentSpec::resident(GroupId::MAJORITY, pos),
                'b' => AgentSpec::resident(GroupId::MINORITY, pos),
                'P' => AgentSpec::influencer(GroupId::MAJORITY, Influence::Positive, tolerance, pos),
                'N' => AgentSpec::influencer(GroupId::MAJORITY, Influence::Negative, tolerance, pos),
                _ => continue,
            };
            grid.place_agent(AgentId(builder.len() as u32), pos).unwrap();
            builder.add(spec);
        }
    }
    let (agents, rngs) = builder.build();
    (grid, agents, rngs)
}

fn rules_sim(rows: &[&str], tolerance: u8, homophily: u8) -> Sim<SchellingBehavior> {
    let (grid, agents, rngs) = board(rows, tolerance);
    SimBuilder::new(test_config(10), grid, agents, rngs, SchellingBehavior::new(homophily).unwrap())
        .build()
        .unwrap()
}

/// Every agent's stored position holds exactly that agent.
fn assert_board_consistent<B: schelling_behavior::BehaviorModel>(sim: &Sim<B>) {
    assert_eq!(sim.grid.occupied_count(), sim.agents.count);
    assert_eq!(
        sim.grid.empty_count() + sim.grid.occupied_count(),
        sim.grid.cell_count()
    );
    for agent in sim.agents.agent_ids() {
        assert_eq!(sim.grid.agent_at(sim.agents.pos[agent.index()]), Some(agent));
    }
}

// ── ModelParams ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod params_tests {
    use super::*;

    #[test]
    fn defaults_match_reference_model() {
        let p = ModelParams::default();
        assert_eq!((p.width, p.height), (20, 20));
        assert_eq!(p.density, 0.8);
        assert_eq!(p.minority_pc, 0.2);
        assert_eq!(p.homophily, 3);
        assert_eq!((p.num_type1, p.tolerance_rate_type1), (1, 8));
        assert_eq!((p.num_type2, p.tolerance_rate_type2), (1, 2));
        assert!(!p.torus);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn out_of_range_values_rejected() {
        let bad = [
            ModelParams { width: 0, ..ModelParams::default() },
            ModelParams { width: 70_000, height: 70_000, ..ModelParams::default() },
            ModelParams { density: 1.5, ..ModelParams::default() },
            ModelParams { minority_pc: -0.1, ..ModelParams::default() },
            ModelParams { homophily: 9, ..ModelParams::default() },
            ModelParams { tolerance_rate_type2: 17, ..ModelParams::default() },
        ];
        for p in bad {
            assert!(matches!(p.validate(), Err(SimError::Config(_))), "{p:?}");
        }
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population_tests {
    use super::*;

    #[test]
    fn zero_density_places_nobody() {
        let pop = populate(&ModelParams { density: 0.0, ..ModelParams::default() }).unwrap();
        assert_eq!(pop.agents.count, 0);
        assert_eq!(pop.grid.empty_count(), 400);
    }

    #[test]
    fn full_density_fills_grid() {
        let pop = populate(&ModelParams { density: 1.0, ..ModelParams::default() }).unwrap();
        assert_eq!(pop.agents.count, 400);
        assert_eq!(pop.grid.empty_count(), 0);
    }

    #[test]
    fn first_placed_agents_are_influencers() {
        let params = ModelParams {
            density: 1.0,
            num_type1: 3,
            tolerance_rate_type1: 5,
            num_type2: 2,
            tolerance_rate_type2: 4,
            ..ModelParams::default()
        };
        let pop = populate(&params).unwrap();
        let a = &pop.agents;
        for i in 0..3 {
            assert_eq!(a.role[i], Role::Influencer(Influence::Positive));
            assert_eq!(a.tolerance[i], 5);
        }
        for i in 3..5 {
            assert_eq!(a.role[i], Role::Influencer(Influence::Negative));
            assert_eq!(a.tolerance[i], 4);
        }
        assert_eq!(a.resident_count(), 395);
        assert!(a.tolerance[5..].iter().all(|&t| t == 0));
        // row-major placement
        assert_eq!(a.pos[0], Pos::new(0, 0));
        assert_eq!(a.pos[4], Pos::new(4, 0));
    }

    #[test]
    fn influencers_capped_by_placed_agents() {
        let params = ModelParams {
            width: 2,
            height: 1,
            density: 1.0,
            num_type1: 5,
            num_type2: 5,
            ..ModelParams::default()
        };
        let pop = populate(&params).unwrap();
        assert_eq!(pop.agents.count_role(Role::Influencer(Influence::Positive)), 2);
        assert_eq!(pop.agents.count_role(Role::Influencer(Influence::Negative)), 0);
    }

    #[test]
    fn minority_share_is_roughly_respected() {
        let params = ModelParams {
            width: 50,
            height: 50,
            density: 1.0,
            minority_pc: 0.2,
            ..ModelParams::default()
        };
        let pop = populate(&params).unwrap();
        let minority = pop.agents.group.iter().filter(|&&g| g == GroupId::MINORITY).count();
        assert!((350..650).contains(&minority), "minority = {minority}");
    }

    #[test]
    fn same_seed_same_board() {
        let p = ModelParams { density: 0.5, ..ModelParams::default() };
        let a = populate(&p).unwrap();
        let b = populate(&p).unwrap();
        assert_eq!(a.agents.pos, b.agents.pos);
        assert_eq!(a.agents.group, b.agents.group);

        let c = populate(&ModelParams { seed: 7, ..p }).unwrap();
        assert_ne!(a.agents.pos, c.agents.pos);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_from_consistent_board() {
        let (grid, agents, rngs) = board(&["ab.", ".P."], 0);
        let sim = SimBuilder::new(test_config(5), grid, agents, rngs, NoopBehavior)
            .build()
            .unwrap();
        assert_eq!(sim.agents.count, 3);
        assert_eq!(sim.tick, Tick::ZERO);
        assert!(sim.running);
    }

    #[test]
    fn stray_grid_occupant_errors() {
        let (mut grid, agents, rngs) = board(&["ab.", "..."], 0);
        grid.place_agent(AgentId(99), Pos::new(2, 1)).unwrap();
        let result = SimBuilder::new(test_config(5), grid, agents, rngs, NoopBehavior).build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { .. })));
    }

    #[test]
    fn misplaced_agent_errors() {
        let (mut grid, agents, rngs) = board(&["ab.", "..."], 0);
        grid.move_agent(Pos::new(0, 0), Pos::new(2, 1)).unwrap();
        let result = SimBuilder::new(test_config(5), grid, agents, rngs, NoopBehavior).build();
        assert!(matches!(result, Err(SimError::Placement { agent: AgentId(0), .. })));
    }

    #[test]
    fn start_tick_is_honoured() {
        let (grid, agents, rngs) = board(&["a"], 0);
        let sim = SimBuilder::new(test_config(5), grid, agents, rngs, NoopBehavior)
            .start_tick(Tick(3))
            .build()
            .unwrap();
        assert_eq!(sim.tick, Tick(3));
    }
}

// ── Step rules ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn happy_residents_never_move() {
        let mut sim = rules_sim(&["aaa", "a.a", "aaa"], 0, 2);
        let before = sim.agents.pos.clone();
        let stats = sim.step().unwrap();
        assert_eq!(stats.happy, 8);
        assert_eq!(stats.moved, 0);
        assert_eq!(sim.agents.pos, before);
        assert!(sim.agents.steps_since_move.iter().all(|&s| s == 1));
    }

    #[test]
    fn positive_influencer_holds_unhappy_resident() {
        let mut sim = rules_sim(&["b..", ".P.", "..."], 0, 1);
        for _ in 0..5 {
            let stats = sim.step().unwrap();
            assert_eq!(stats.held, 1);
            assert_eq!(stats.moved, 0);
        }
        assert_eq!(sim.agents.pos[0], Pos::new(0, 0));
    }

    #[test]
    fn negative_influencer_makes_short_hops() {
        let rows = [
            ".......",
            ".......",
            ".......",
            "...b...",
            "...N...",
            ".......",
            ".......",
        ];
        let mut sim = rules_sim(&rows, 0, 1);
        let start = sim.agents.pos[0];
        let stats = sim.step().unwrap();
        assert_eq!(stats.hops, 1);
        assert_eq!(stats.happy, 0);
        // two hops of at most 2 cells each
        assert!(start.chebyshev(sim.agents.pos[0]) <= 4);
        // tolerance 0: the influencer stays
        assert_eq!(sim.agents.pos[1], Pos::new(3, 4));
        assert_board_consistent(&sim);
    }

    #[test]
    fn blocked_hops_still_count_as_hopping() {
        // every cell within two of the minority resident is taken
        let mut sim = rules_sim(&["aaa", "aba", "aNa"], 0, 1);
        let stats = sim.step().unwrap();
        assert_eq!(stats.hops, 1);
        assert_eq!(stats.failed_moves, 2);
        assert_eq!(stats.moved, 0);
        assert_eq!(stats.happy, 7);
        assert_eq!(sim.agents.pos[4], Pos::new(1, 1));
    }

    #[test]
    fn unhappy_resident_relocates() {
        let mut sim = rules_sim(&["ab.", "...", "..."], 0, 1);
        let stats = sim.step().unwrap();
        assert_eq!(stats.moved, 2);
        assert_ne!(sim.agents.pos[0], Pos::new(0, 0));
        assert_eq!(sim.agents.steps_since_move[0], 0);
        assert_board_consistent(&sim);
    }

    #[test]
    fn full_grid_relocate_is_a_noop() {
        let mut sim = rules_sim(&["ab"], 0, 1);
        let stats = sim.step().unwrap();
        assert_eq!(stats.moved, 0);
        assert_eq!(stats.failed_moves, 2);
        assert_eq!(sim.agents.pos, vec![Pos::new(0, 0), Pos::new(1, 0)]);
    }

    #[test]
    fn intolerant_influencer_relocates() {
        let mut sim = rules_sim(&["P..", "...", "..."], 16, 0);
        let stats = sim.step().unwrap();
        assert_eq!(stats.moved, 1);
        assert_ne!(sim.agents.pos[0], Pos::new(0, 0));
    }

    #[test]
    fn influencers_are_never_counted_happy() {
        let mut sim = rules_sim(&["PN", "NP"], 0, 0);
        assert_eq!(sim.step().unwrap().happy, 0);
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        starts:    Vec<Tick>,
        ends:      Vec<(Tick, StepStats)>,
        snapshots: Vec<Tick>,
        finished:  Option<Tick>,
    }

    impl SimObserver for Recorder {
        fn on_step_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_step_end(&mut self, tick: Tick, stats: &StepStats) {
            self.ends.push((tick, *stats));
        }
        fn on_snapshot(&mut self, tick: Tick, _grid: &SingleGrid, _agents: &AgentStore) {
            self.snapshots.push(tick);
        }
        fn on_sim_end(&mut self, tick: Tick) {
            self.finished = Some(tick);
        }
    }

    #[test]
    fn run_reaches_end_tick() {
        let (grid, agents, rngs) = board(&["ab", ".."], 0);
        let mut sim = SimBuilder::new(test_config(10), grid, agents, rngs, NoopBehavior)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.tick, Tick(10));
        assert_eq!(sim.history.len(), 10);
    }

    #[test]
    fn observer_hooks_fire_in_order() {
        let (grid, agents, rngs) = board(&["ab", ".."], 0);
        let config = SimConfig { output_interval_steps: 2, ..test_config(5) };
        let mut sim = SimBuilder::new(config, grid, agents, rngs, NoopBehavior)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.starts, (0..5).map(Tick).collect::<Vec<_>>());
        assert_eq!(rec.ends.len(), 5);
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(2), Tick(4)]);
        assert_eq!(rec.finished, Some(Tick(5)));
    }

    #[test]
    fn run_steps_ignores_end_tick() {
        let (grid, agents, rngs) = board(&["a"], 0);
        let mut sim = SimBuilder::new(test_config(2), grid, agents, rngs, NoopBehavior)
            .build()
            .unwrap();
        sim.run_steps(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.tick, Tick(5));
        sim.run_steps(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.tick, Tick(8));
    }

    #[test]
    fn stops_when_settled() {
        let (grid, agents, rngs) = board(&["aaa", "a.a", "aaa"], 0);
        let config = SimConfig { stop_when_settled: true, ..test_config(10) };
        let mut sim = SimBuilder::new(config, grid, agents, rngs, SchellingBehavior::new(2).unwrap())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(!sim.running);
        assert_eq!(sim.history.len(), 1);
        assert_eq!(sim.happy(), 8);
    }

    #[test]
    fn keeps_running_without_stop_flag() {
        let mut sim = rules_sim(&["aaa", "a.a", "aaa"], 0, 2);
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.running);
        assert_eq!(sim.history.len(), 10);
    }
}

// ── SchellingModel ────────────────────────────────────────────────────────────

#[cfg(test)]
mod model_tests {
    use super::*;

    fn positions_after(model: &mut SchellingModel, steps: u64) -> Vec<Pos> {
        model.sim.run_steps(steps, &mut NoopObserver).unwrap();
        model.sim.agents.pos.clone()
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut a = SchellingModel::new(ModelParams::default()).unwrap();
        let mut b = SchellingModel::new(ModelParams::default()).unwrap();
        assert_eq!(positions_after(&mut a, 10), positions_after(&mut b, 10));
        assert_eq!(a.sim.history, b.sim.history);
    }

    #[test]
    fn reset_replays_from_start() {
        let mut model = SchellingModel::new(ModelParams::default()).unwrap();
        let initial = model.sim.agents.pos.clone();
        let first = positions_after(&mut model, 5);

        model.reset().unwrap();
        assert_eq!(model.sim.agents.pos, initial);
        assert_eq!(model.sim.tick, Tick::ZERO);
        assert!(model.sim.history.is_empty());
        assert_eq!(positions_after(&mut model, 5), first);
    }

    #[test]
    fn reset_with_invalid_params_keeps_model() {
        let mut model = SchellingModel::new(ModelParams::default()).unwrap();
        model.sim.run_steps(2, &mut NoopObserver).unwrap();
        let bad = ModelParams { density: 2.0, ..ModelParams::default() };
        assert!(model.reset_with(bad).is_err());
        assert_eq!(model.sim.tick, Tick(2));
        assert_eq!(model.params, ModelParams::default());
    }

    #[test]
    fn reset_with_new_params_rebuilds() {
        let mut model = SchellingModel::new(ModelParams::default()).unwrap();
        let params = ModelParams { width: 5, height: 4, density: 1.0, ..ModelParams::default() };
        model.reset_with(params.clone()).unwrap();
        assert_eq!(model.params, params);
        assert_eq!(model.sim.agents.count, 20);
        assert_eq!(model.sim.grid.width(), 5);
    }

    #[test]
    fn happy_count_bounded_by_residents() {
        let mut model = SchellingModel::new(ModelParams::default()).unwrap();
        assert_eq!(model.happy(), 0);
        model.sim.run_steps(3, &mut NoopObserver).unwrap();
        assert!(model.happy() <= model.sim.agents.resident_count());
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn board_stays_consistent(
            width in 1u32..8,
            height in 1u32..8,
            density in 0.0f64..=1.0,
            homophily in 0u8..=8,
            torus in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let params = ModelParams {
                width, height, density, homophily, torus, seed,
                num_type1: 2,
                tolerance_rate_type1: 3,
                num_type2: 2,
                tolerance_rate_type2: 1,
                ..ModelParams::default()
            };
            let mut model = SchellingModel::new(params).unwrap();
            for _ in 0..5 {
                let stats = model.sim.step().unwrap();
                prop_assert!(stats.happy <= model.sim.agents.resident_count());
                prop_assert!(stats.moved <= model.sim.agents.count);
                assert_board_consistent(&model.sim);
            }
        }
    }
}
