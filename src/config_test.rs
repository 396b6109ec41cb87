use super::*;

#[test]
fn participant_config_points_at_participant_routes() {
    let config = ViewConfig::for_role(Role::Participant);
    assert_eq!(config.session_cookie, "coco_access_token");
    assert_eq!(config.login_route, "/login");
    assert_eq!(config.home_route, "/");
    assert_eq!(config.login_endpoint, "/participants/add");
    assert!(config.voting_enabled);
}

#[test]
fn admin_config_points_at_admin_routes() {
    let config = ViewConfig::for_role(Role::Admin);
    assert_eq!(config.session_cookie, "coco_admin_token");
    assert_eq!(config.login_route, "/admin/login");
    assert_eq!(config.home_route, "/admin");
    assert_eq!(config.login_endpoint, "/admin/start-session");
    assert!(!config.voting_enabled);
}

#[test]
fn both_roles_share_listing_endpoint_and_interval() {
    assert_eq!(ViewConfig::PARTICIPANT.elections_endpoint, "/elections");
    assert_eq!(ViewConfig::ADMIN.elections_endpoint, "/elections");
    assert_eq!(ViewConfig::PARTICIPANT.poll_interval, Duration::from_secs(5));
    assert_eq!(ViewConfig::ADMIN.poll_interval, POLL_INTERVAL);
}

#[test]
fn default_config_is_participant() {
    assert_eq!(ViewConfig::default(), ViewConfig::PARTICIPANT);
    assert_eq!(Role::default(), Role::Participant);
}
