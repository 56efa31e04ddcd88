use crate::common;

const USER: &str = r#"{"username":"sleeperuser","user_id":"12345678","display_name":"SleeperUser",
    "avatar":"cc12ec49965eb7856f84d71cf85306af","is_bot":false,"metadata":{},"created":null}"#;

#[tokio::test]
async fn user_by_username_and_id_share_the_endpoint() {
    let server = common::setup_server();
    let by_name = common::mock_json(&server, "/v1/user/sleeperuser", USER.to_string());
    let by_id = common::mock_json(&server, "/v1/user/12345678", USER.to_string());
    let client = common::client_for(&server);

    let a = client.user_by_username("sleeperuser").await.unwrap();
    let b = client.user_by_id("12345678").await.unwrap();

    by_name.assert();
    by_id.assert();
    assert_eq!(a, b);
    assert_eq!(a.user_id, "12345678");
    assert_eq!(a.avatar.as_deref(), Some("cc12ec49965eb7856f84d71cf85306af"));
}

#[tokio::test]
async fn path_segments_are_percent_encoded() {
    let server = common::setup_server();
    let mock = common::mock_json(&server, "/v1/user/some%20name", USER.to_string());
    let client = common::client_for(&server);

    let user = client.user("some name").await.unwrap();

    mock.assert();
    assert_eq!(user.username, "sleeperuser");
}

#[tokio::test]
async fn user_leagues_for_a_season() {
    let server = common::setup_server();
    let mock = common::mock_json(
        &server,
        "/v1/user/12345678/leagues/nfl/2024",
        format!("[{}]", common::fixture("league", common::LEAGUE_ID)),
    );
    let client = common::client_for(&server);

    let leagues = client.user_leagues("12345678", "nfl", "2024").await.unwrap();

    mock.assert();
    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].league_id, common::LEAGUE_ID);
}

#[tokio::test]
async fn avatar_bytes_are_returned_verbatim() {
    let server = common::setup_server();
    let png: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];
    let full = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/avatars/abc123");
        then.status(200).header("content-type", "image/png").body(png.clone());
    });
    let thumb = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/avatars/thumbs/abc123");
        then.status(200).header("content-type", "image/png").body(&png[..4]);
    });
    let client = common::client_for(&server);

    assert_eq!(client.avatar("abc123").await.unwrap(), png);
    assert_eq!(client.avatar_thumbnail("abc123").await.unwrap(), &png[..4]);
    full.assert();
    thumb.assert();
}

#[tokio::test]
async fn missing_avatar_is_a_status_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/avatars/nope");
        then.status(404);
    });
    let client = common::client_for(&server);

    let err = client.avatar("nope").await.unwrap_err();

    mock.assert();
    assert_eq!(err.status(), Some(404));
}
