use sky_defender::audio::AudioEvent;
use sky_defender::collision::*;
use sky_defender::entities::*;
use sky_defender::geometry::Rect;
use sky_defender::registry::*;

/// Insert `entity` and move it to `rect`.
fn place(reg: &mut Registry, entity: Entity, rect: Rect) -> EntityId {
    let id = reg.create(entity);
    if let Some(e) = reg.get_mut(id) {
        e.rect = rect;
    }
    id
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[test]
fn overlap_is_symmetric() {
    let a = Rect::new(10, 10, 20, 20);
    let b = Rect::new(15, 15, 20, 20);
    let c = Rect::new(100, 100, 5, 5);
    let small = Rect::new(0, 0, 5, 5);
    assert!(collide(&a, &b));
    assert!(collide(&b, &a));
    assert!(!collide(&small, &c));
    assert!(!collide(&c, &small));
}

#[test]
fn touching_edges_do_not_collide() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(10, 0, 10, 10);
    assert!(!collide(&a, &b));
}

#[test]
fn group_collide_reports_each_pair_once_in_both_directions() {
    let mut reg = Registry::new();
    let enemy = place(&mut reg, Entity::enemy(true), Rect::new(10, 10, 20, 20));
    let shot = place(&mut reg, Entity::shot((0, 0)), Rect::new(15, 15, 20, 20));
    place(&mut reg, Entity::shot((0, 0)), Rect::new(100, 100, 5, 5));

    assert_eq!(group_collide(&reg, Group::Enemies, Group::Shots), vec![(enemy, shot)]);
    assert_eq!(group_collide(&reg, Group::Shots, Group::Enemies), vec![(shot, enemy)]);
}

#[test]
fn sprite_collide_ignores_itself_and_dead_handles() {
    let mut reg = Registry::new();
    let a = place(&mut reg, Entity::enemy(true), Rect::new(0, 0, 50, 50));
    let b = place(&mut reg, Entity::enemy(true), Rect::new(10, 10, 50, 50));
    assert_eq!(sprite_collide(&reg, a, Group::Enemies), vec![b]);
    reg.destroy(a);
    assert!(sprite_collide(&reg, a, Group::Enemies).is_empty());
}

// ── Player categories ─────────────────────────────────────────────────────────

#[test]
fn player_and_enemy_destroy_each_other() {
    let mut reg = Registry::new();
    let player = reg.create(Entity::player());
    let enemy = place(&mut reg, Entity::enemy(true), Rect::new(300, 430, 80, 40));

    let report = resolve_all(&mut reg, Some(player));

    assert!(report.player_destroyed);
    assert_eq!(report.score, 1);
    assert!(!reg.is_alive(player));
    assert!(!reg.is_alive(enemy));
    assert_eq!(report.explosions.len(), 2);
    assert!(report.explosions.iter().all(|id| reg.is_alive(*id)));
    assert_eq!(report.events, vec![AudioEvent::EnemyDestroyed, AudioEvent::PlayerDestroyed]);
    assert_eq!(
        report.hits,
        vec![Hit { category: Category::PlayerEnemy, striker: player, target: enemy }]
    );
}

#[test]
fn player_hitting_hazard_sounds_like_a_hazard() {
    let mut reg = Registry::new();
    let player = reg.create(Entity::player());
    place(&mut reg, Entity::hazard(true), Rect::new(280, 400, 100, 100));

    let report = resolve_all(&mut reg, Some(player));
    assert_eq!(report.events, vec![AudioEvent::HazardDestroyed, AudioEvent::PlayerDestroyed]);
}

#[test]
fn bomb_kills_the_player() {
    let mut reg = Registry::new();
    let player = reg.create(Entity::player());
    let bomb = place(&mut reg, Entity::bomb_at((0, 0)), Rect::new(315, 450, 10, 20));

    let report = resolve_all(&mut reg, Some(player));
    assert!(report.player_destroyed);
    assert_eq!(report.score, 1);
    assert!(!reg.is_alive(bomb));
    assert_eq!(report.hits[0].category, Category::PlayerBomb);
}

#[test]
fn dead_player_takes_part_in_one_collision_only() {
    let mut reg = Registry::new();
    let player = reg.create(Entity::player());
    let aircraft = place(&mut reg, Entity::aircraft(true), Rect::new(280, 420, 90, 70));
    let enemy = place(&mut reg, Entity::enemy(true), Rect::new(300, 430, 80, 40));
    let bomb = place(&mut reg, Entity::bomb_at((0, 0)), Rect::new(315, 450, 10, 20));

    let report = resolve_all(&mut reg, Some(player));

    assert_eq!(report.hits.len(), 1);
    assert_eq!(report.hits[0].category, Category::PlayerAircraft);
    assert_eq!(report.score, 1);
    assert!(!reg.is_alive(aircraft));
    assert!(reg.is_alive(enemy));
    assert!(reg.is_alive(bomb));
}

#[test]
fn player_contact_wins_over_a_projectile_on_the_same_target() {
    let mut reg = Registry::new();
    let player = reg.create(Entity::player());
    let enemy = place(&mut reg, Entity::enemy(true), Rect::new(300, 400, 80, 60));
    let shot = place(&mut reg, Entity::shot((0, 0)), Rect::new(340, 400, 6, 18));

    let report = resolve_all(&mut reg, Some(player));

    assert_eq!(report.hits.len(), 1);
    assert_eq!(report.hits[0].category, Category::PlayerEnemy);
    assert!(!reg.is_alive(enemy));
    assert!(reg.is_alive(shot));
    assert_eq!(report.score, 1);
}

#[test]
fn missing_player_skips_player_categories() {
    let mut reg = Registry::new();
    let player = reg.create(Entity::player());
    place(&mut reg, Entity::enemy(true), Rect::new(300, 430, 80, 40));
    reg.destroy(player);

    assert_eq!(resolve_all(&mut reg, Some(player)), CollisionReport::default());
    assert_eq!(resolve_all(&mut reg, None), CollisionReport::default());
}

// ── Projectile categories ─────────────────────────────────────────────────────

#[test]
fn shot_destroys_enemy() {
    let mut reg = Registry::new();
    let enemy = place(&mut reg, Entity::enemy(true), Rect::new(100, 100, 80, 40));
    let shot = place(&mut reg, Entity::shot((0, 0)), Rect::new(120, 130, 6, 18));

    let report = resolve_all(&mut reg, None);

    assert_eq!(report.score, 1);
    assert!(!report.player_destroyed);
    assert!(!reg.is_alive(enemy));
    assert!(!reg.is_alive(shot));
    assert_eq!(report.explosions.len(), 1);
    assert_eq!(report.events, vec![AudioEvent::EnemyDestroyed]);

    let boom = reg.get(report.explosions[0]).map(|e| e.rect.center());
    assert_eq!(boom, Some(Rect::new(100, 100, 80, 40).center()));
}

#[test]
fn shot_pops_hazard() {
    let mut reg = Registry::new();
    place(&mut reg, Entity::hazard(true), Rect::new(100, 100, 100, 100));
    place(&mut reg, Entity::shot((0, 0)), Rect::new(150, 150, 6, 18));

    let report = resolve(&mut reg, None, Category::ShotHazard);
    assert_eq!(report.score, 1);
    assert_eq!(report.events, vec![AudioEvent::HazardDestroyed]);
}

#[test]
fn one_target_consumes_one_shot() {
    let mut reg = Registry::new();
    place(&mut reg, Entity::aircraft(true), Rect::new(100, 100, 90, 70));
    let a = place(&mut reg, Entity::shot((0, 0)), Rect::new(120, 120, 6, 18));
    let b = place(&mut reg, Entity::shot((0, 0)), Rect::new(130, 120, 6, 18));

    let report = resolve_all(&mut reg, None);
    assert_eq!(report.score, 1);
    assert_eq!(reg.is_alive(a) as u8 + reg.is_alive(b) as u8, 1);
}

#[test]
fn one_shot_takes_out_one_target() {
    let mut reg = Registry::new();
    let first = place(&mut reg, Entity::enemy(true), Rect::new(100, 100, 80, 40));
    let second = place(&mut reg, Entity::enemy(true), Rect::new(110, 100, 80, 40));
    place(&mut reg, Entity::shot((0, 0)), Rect::new(150, 110, 6, 18));

    let report = resolve_all(&mut reg, None);
    assert_eq!(report.score, 1);
    assert_eq!(reg.is_alive(first) as u8 + reg.is_alive(second) as u8, 1);
}

#[test]
fn every_hit_scores_exactly_one() {
    let mut reg = Registry::new();
    for i in 0..3 {
        let x = 10 + i * 200;
        place(&mut reg, Entity::enemy(true), Rect::new(x, 100, 80, 40));
        place(&mut reg, Entity::shot((0, 0)), Rect::new(x + 10, 110, 6, 18));
    }
    let report = resolve_all(&mut reg, None);
    assert_eq!(report.score, 3);
    assert_eq!(report.hits.len(), 3);
    assert!(reg.is_empty(Group::Enemies));
    assert!(reg.is_empty(Group::Shots));
}

#[test]
fn no_overlap_no_score() {
    let mut reg = Registry::new();
    let player = reg.create(Entity::player());
    place(&mut reg, Entity::enemy(true), Rect::new(0, 0, 80, 40));
    place(&mut reg, Entity::shot((0, 0)), Rect::new(300, 300, 6, 18));

    let report = resolve_all(&mut reg, Some(player));
    assert_eq!(report, CollisionReport::default());
    assert_eq!(reg.len(Group::All), 3);
}

#[test]
fn categories_run_player_first_bombs_last() {
    assert_eq!(Category::ORDER[0], Category::PlayerAircraft);
    assert_eq!(Category::ORDER[3], Category::ShotAircraft);
    assert_eq!(Category::ORDER[6], Category::PlayerBomb);
    assert!(Category::ORDER[..3].iter().all(Category::involves_player));
    assert!(Category::ORDER[3..6].iter().all(|c| !c.involves_player()));
}
