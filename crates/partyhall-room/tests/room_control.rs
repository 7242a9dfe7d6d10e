//! Integration tests for room control over the in-memory store.

use partyhall_registry::{PlayerField, PlayerRegistry};
use partyhall_store::MemoryStore;
use partyhall_room::{
    GameStart, KvRoomStore, LeaveOutcome, RoleSplit, RoomConfig, RoomControl, RoomError,
    RoomState, RoomStateStore,
};
use partyhall_types::{GameMode, PlayerId, RoomId};

// =========================================================================
// Helpers
// =========================================================================

type Control = RoomControl<MemoryStore, KvRoomStore<MemoryStore>>;

fn pid(id: &str) -> PlayerId {
    PlayerId::from(id)
}

fn rid(id: &str) -> RoomId {
    RoomId::from(id)
}

fn control_with(config: RoomConfig) -> (Control, KvRoomStore<MemoryStore>) {
    let store = MemoryStore::new();
    let registry = PlayerRegistry::new(store.clone());
    let rooms = KvRoomStore::new(store);
    (
        RoomControl::new(registry, rooms.clone(), config),
        rooms,
    )
}

fn control() -> (Control, KvRoomStore<MemoryStore>) {
    control_with(RoomConfig::default())
}

/// Seeds a room hosted by `host` plus the given members (the host
/// should normally be among them).
async fn seed_room(
    ctl: &Control,
    rooms: &KvRoomStore<MemoryStore>,
    room: &str,
    host: &str,
    mode: GameMode,
    members: &[&str],
) {
    rooms
        .save(&RoomState {
            id: rid(room),
            host_player_id: pid(host),
            game_mode: mode,
        })
        .await
        .unwrap();
    for member in members {
        ctl.registry()
            .create(&pid(member), member, 0, true)
            .await
            .unwrap();
        ctl.registry()
            .update(&pid(member), &[PlayerField::RoomId(Some(rid(room)))])
            .await
            .unwrap();
    }
}

// =========================================================================
// change_game_mode()
// =========================================================================

#[tokio::test]
async fn test_change_game_mode_by_host_persists() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host", "p2"]).await;

    let room = ctl
        .change_game_mode(&pid("host"), &rid("R1"), GameMode::Faker)
        .await
        .unwrap();

    assert_eq!(room.game_mode, GameMode::Faker);
    // Persisted, not just returned.
    let stored = rooms.load(&rid("R1")).await.unwrap().unwrap();
    assert_eq!(stored.game_mode, GameMode::Faker);
}

#[tokio::test]
async fn test_change_game_mode_same_mode_is_idempotent() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Faker, &["host"]).await;

    let room = ctl
        .change_game_mode(&pid("host"), &rid("R1"), GameMode::Faker)
        .await
        .unwrap();

    assert_eq!(room.game_mode, GameMode::Faker);
}

#[tokio::test]
async fn test_change_game_mode_by_non_host_unauthorized() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host", "p2"]).await;

    let result = ctl
        .change_game_mode(&pid("p2"), &rid("R1"), GameMode::Faker)
        .await;

    assert!(matches!(result, Err(RoomError::Unauthorized(p, r)) if p == pid("p2") && r == rid("R1")));
    // No side effect.
    let stored = rooms.load(&rid("R1")).await.unwrap().unwrap();
    assert_eq!(stored.game_mode, GameMode::Basic);
}

#[tokio::test]
async fn test_change_game_mode_missing_room_not_found() {
    let (ctl, _rooms) = control();

    let result = ctl
        .change_game_mode(&pid("host"), &rid("R9"), GameMode::Basic)
        .await;

    assert!(matches!(result, Err(RoomError::RoomNotFound(r)) if r == rid("R9")));
}

// =========================================================================
// transfer_host()
// =========================================================================

#[tokio::test]
async fn test_transfer_host_to_member_persists() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host", "p2"]).await;

    let room = ctl
        .transfer_host(&pid("host"), &rid("R1"), &pid("p2"))
        .await
        .unwrap();

    assert_eq!(room.host_player_id, pid("p2"));
    let stored = rooms.load(&rid("R1")).await.unwrap().unwrap();
    assert_eq!(stored.host_player_id, pid("p2"));
}

#[tokio::test]
async fn test_transfer_host_to_self_rejected() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host", "p2"]).await;

    let result = ctl.transfer_host(&pid("host"), &rid("R1"), &pid("host")).await;

    assert!(matches!(result, Err(RoomError::SelfTransfer)));
}

#[tokio::test]
async fn test_transfer_host_by_non_host_unauthorized() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host", "p2"]).await;

    let result = ctl.transfer_host(&pid("p2"), &rid("R1"), &pid("p2")).await;

    assert!(matches!(result, Err(RoomError::Unauthorized(..))));
    let stored = rooms.load(&rid("R1")).await.unwrap().unwrap();
    assert_eq!(stored.host_player_id, pid("host"));
}

#[tokio::test]
async fn test_transfer_host_to_non_member_rejected() {
    // The target has room_id == R1 but is_member == false — a
    // placeholder, never host-eligible.
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host"]).await;
    ctl.registry().create(&pid("spec"), "spec", 0, false).await.unwrap();
    ctl.registry()
        .update(&pid("spec"), &[PlayerField::RoomId(Some(rid("R1")))])
        .await
        .unwrap();

    let result = ctl.transfer_host(&pid("host"), &rid("R1"), &pid("spec")).await;

    assert!(
        matches!(result, Err(RoomError::TargetNotMember(p, r)) if p == pid("spec") && r == rid("R1"))
    );
    let stored = rooms.load(&rid("R1")).await.unwrap().unwrap();
    assert_eq!(stored.host_player_id, pid("host"));
}

#[tokio::test]
async fn test_transfer_host_to_player_in_other_room_rejected() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host"]).await;
    seed_room(&ctl, &rooms, "R2", "p2", GameMode::Basic, &["p2"]).await;

    let result = ctl.transfer_host(&pid("host"), &rid("R1"), &pid("p2")).await;

    assert!(matches!(result, Err(RoomError::TargetNotMember(..))));
}

// =========================================================================
// start_game()
// =========================================================================

#[tokio::test]
async fn test_start_game_basic_mode_has_no_role_split() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host", "p2"]).await;

    let start = ctl.start_game(&pid("host"), &rid("R1")).await.unwrap();

    assert_eq!(
        start,
        GameStart {
            room: rooms.load(&rid("R1")).await.unwrap().unwrap(),
            member_count: 2,
            role_split: None,
            below_recommended: false,
        }
    );
}

#[tokio::test]
async fn test_start_game_faker_reports_role_split() {
    let (ctl, rooms) = control();
    seed_room(
        &ctl,
        &rooms,
        "R1",
        "host",
        GameMode::Faker,
        &["host", "p2", "p3", "p4", "p5", "p6"],
    )
    .await;

    let start = ctl.start_game(&pid("host"), &rid("R1")).await.unwrap();

    assert_eq!(start.member_count, 6);
    assert_eq!(start.role_split, Some(RoleSplit { fakers: 2, keepers: 4 }));
    assert!(!start.below_recommended);
}

#[tokio::test]
async fn test_start_game_faker_below_recommended_is_flagged() {
    // Two members: allowed by the enforced minimum (1), but below
    // the recommended three for a balanced split.
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Faker, &["host", "p2"]).await;

    let start = ctl.start_game(&pid("host"), &rid("R1")).await.unwrap();

    assert!(start.below_recommended);
    assert_eq!(start.role_split, Some(RoleSplit { fakers: 1, keepers: 1 }));
}

#[tokio::test]
async fn test_start_game_faker_below_enforced_minimum_fails() {
    let (ctl, rooms) = control_with(RoomConfig {
        faker_min_members: 3,
        ..RoomConfig::default()
    });
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Faker, &["host", "p2"]).await;

    let result = ctl.start_game(&pid("host"), &rid("R1")).await;

    assert!(matches!(
        result,
        Err(RoomError::InsufficientPlayers { required: 3, actual: 2 })
    ));
}

#[tokio::test]
async fn test_start_game_by_non_host_unauthorized() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Faker, &["host", "p2"]).await;

    let result = ctl.start_game(&pid("p2"), &rid("R1")).await;

    assert!(matches!(result, Err(RoomError::Unauthorized(..))));
}

// =========================================================================
// leave_room()
// =========================================================================

#[tokio::test]
async fn test_leave_room_non_host_removes_record_only() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host", "p2"]).await;

    let outcome = ctl.leave_room(&pid("p2"), &rid("R1")).await.unwrap();

    assert_eq!(outcome, LeaveOutcome::Left);
    // Record is gone entirely, not reset.
    assert!(ctl.registry().get_by_id(&pid("p2")).await.is_err());
    // Host untouched.
    let stored = rooms.load(&rid("R1")).await.unwrap().unwrap();
    assert_eq!(stored.host_player_id, pid("host"));
}

#[tokio::test]
async fn test_leave_room_host_promotes_first_remaining_member() {
    let (ctl, rooms) = control();
    // MemoryStore enumerates sorted keys, so "p2" scans before "p3".
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host", "p2", "p3"]).await;

    let outcome = ctl.leave_room(&pid("host"), &rid("R1")).await.unwrap();

    assert_eq!(outcome, LeaveOutcome::HostPassedTo(pid("p2")));
    let stored = rooms.load(&rid("R1")).await.unwrap().unwrap();
    assert_eq!(stored.host_player_id, pid("p2"));
}

#[tokio::test]
async fn test_leave_room_last_member_dissolves_room() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host"]).await;

    let outcome = ctl.leave_room(&pid("host"), &rid("R1")).await.unwrap();

    assert_eq!(outcome, LeaveOutcome::Dissolved);
    assert_eq!(rooms.load(&rid("R1")).await.unwrap(), None);
}

#[tokio::test]
async fn test_leave_room_not_in_room_rejected() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host"]).await;
    seed_room(&ctl, &rooms, "R2", "p2", GameMode::Basic, &["p2"]).await;

    // p2 exists but is in R2, not R1.
    let result = ctl.leave_room(&pid("p2"), &rid("R1")).await;
    assert!(matches!(result, Err(RoomError::NotInRoom(p, r)) if p == pid("p2") && r == rid("R1")));

    // Unknown player.
    let result = ctl.leave_room(&pid("ghost"), &rid("R1")).await;
    assert!(matches!(result, Err(RoomError::NotInRoom(..))));
}

// =========================================================================
// Authorization leaves membership unchanged
// =========================================================================

#[tokio::test]
async fn test_unauthorized_operations_leave_membership_unchanged() {
    let (ctl, rooms) = control();
    seed_room(&ctl, &rooms, "R1", "host", GameMode::Basic, &["host", "p2", "p3"]).await;
    let before = ctl
        .registry()
        .membership()
        .members_of(&rid("R1"))
        .await
        .unwrap();

    let _ = ctl.change_game_mode(&pid("p2"), &rid("R1"), GameMode::Faker).await;
    let _ = ctl.transfer_host(&pid("p2"), &rid("R1"), &pid("p3")).await;
    let _ = ctl.start_game(&pid("p2"), &rid("R1")).await;

    let after = ctl
        .registry()
        .membership()
        .members_of(&rid("R1"))
        .await
        .unwrap();
    assert_eq!(after, before);
    let stored = rooms.load(&rid("R1")).await.unwrap().unwrap();
    assert_eq!(stored.host_player_id, pid("host"));
    assert_eq!(stored.game_mode, GameMode::Basic);
}
