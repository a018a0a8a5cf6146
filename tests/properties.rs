//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use web_climb::sim::{TickInput, WebId, WebKind, WebStore, World, is_contacting, tick};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, up, down)| TickInput {
            left,
            right,
            up,
            down,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_never_decreases(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut world = World::new(seed);
        let mut last = world.score;
        for input in &inputs {
            let snap = tick(&mut world, input);
            prop_assert!(snap.score >= last);
            prop_assert!(snap.score >= snap.avatar_y);
            last = snap.score;
        }
    }

    #[test]
    fn strengths_and_jumps_stay_in_range(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut world = World::new(seed);
        for input in &inputs {
            tick(&mut world, input);
            prop_assert!(world.avatar.jump_height <= world.tuning.max_jump_height);
            for web in world.webs.iter() {
                prop_assert!(web.strength >= 0.0 && web.strength <= 1.0);
                if web.kind != WebKind::Normal {
                    prop_assert_eq!(web.strength, 1.0);
                }
            }
            prop_assert!(!world.webs.is_empty());
            prop_assert_eq!(world.webs.as_slice()[0].kind, WebKind::Floor);
        }
    }

    #[test]
    fn legs_stay_inside_walls(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut world = World::new(seed);
        let span = world.tuning.leg_span();
        for input in &inputs {
            let snap = tick(&mut world, input);
            prop_assert!(snap.avatar_x - span >= 0.0);
            prop_assert!(snap.avatar_x + span <= world.tuning.view_width);
        }
    }

    #[test]
    fn contact_is_symmetric_about_the_web(
        height in 0i32..2000,
        x in -1000i32..1000,
        offset in 0i32..20,
    ) {
        let mut store = WebStore::new();
        let id = store.push(
            Vec2::new(0.0, height as f32),
            Vec2::new(300.0, height as f32),
            WebKind::Normal,
        );
        let web = store.get(id).unwrap();
        let (x, h, d) = (x as f32, height as f32, offset as f32);
        prop_assert_eq!(
            is_contacting(web, x, h + d, 5.0, 0.01),
            is_contacting(web, x, h - d, 5.0, 0.01)
        );
        prop_assert_eq!(is_contacting(web, x, h + d, 5.0, 0.01), offset <= 5);
    }

    #[test]
    fn prune_keeps_exactly_the_prefix_before_first_expired(
        expired in prop::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut store = WebStore::with_floor(300.0);
        for (i, _) in expired.iter().enumerate() {
            let y = 60.0 * (i + 1) as f32;
            store.push(Vec2::new(0.0, y), Vec2::new(300.0, y + 30.0), WebKind::Normal);
        }
        let ids: Vec<WebId> = store.iter().map(|w| w.id).collect();
        for (i, &gone) in expired.iter().enumerate() {
            if gone {
                store.get_mut(ids[i + 1]).unwrap().strength = 0.0;
            }
        }

        let removed = store.prune_expired(0.01);
        let keep = expired.iter().position(|&g| g).map_or(ids.len(), |i| i + 1);
        prop_assert_eq!(removed, ids.len() - keep);
        let left: Vec<WebId> = store.iter().map(|w| w.id).collect();
        prop_assert_eq!(&left[..], &ids[..keep]);
        prop_assert!(store.iter().all(|w| w.strength == 1.0));
    }
}
