use serde_json::{json, Value};
use speedrun::{Client, NativeFetcher};
use speedrun_graphql::{build_schema, NodeKind};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client(server: &MockServer) -> Client {
    Client::new(&format!("{}/api/v1", server.uri()), NativeFetcher::runtime_fetcher().unwrap())
}

async fn execute(server: &MockServer, query: &str) -> Value {
    let schema = build_schema(true);
    let request = async_graphql::Request::new(query).data(client(server).session());

    serde_json::to_value(schema.execute(request).await).unwrap()
}

fn game(id: &str, name: &str, platforms: &[&str]) -> Value {
    json!({
        "id": id,
        "names": {"international": name, "japanese": null, "twitch": name},
        "abbreviation": id,
        "platforms": platforms,
        "moderators": {"zx7gd1yx": "super-moderator"},
        "assets": {"logo": {"uri": "https://www.speedrun.com/logo.png", "width": 60, "height": 30}, "icon": null}
    })
}

async fn mount_json(server: &MockServer, at: &str, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn shared_platforms_are_fetched_once_per_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/games"))
        .and(query_param("max", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                game("o1y9wo6q", "Super Mario 64", &["w89rwelk", "nzelreqp"]),
                game("pd0wq31e", "Ocarina of Time", &["nzelreqp", "v06dk3e4"]),
            ],
            "pagination": {"offset": 0, "max": 2, "size": 2, "links": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    for (id, name) in [("w89rwelk", "Nintendo 64"), ("nzelreqp", "Wii Virtual Console"), ("v06dk3e4", "Wii U")] {
        let body = json!({"data": {"id": id, "name": name, "released": 2006}});
        mount_json(&server, &format!("/api/v1/platforms/{id}"), body, 1).await;
    }

    let response = execute(
        &server,
        "{ viewer { games(first: 2) { edges { cursor node { rawId platforms { name } } } pageInfo { hasNextPage hasPreviousPage } } } }",
    )
    .await;

    assert_eq!(
        response["data"]["viewer"]["games"],
        json!({
            "edges": [
                {
                    "cursor": "MQ==",
                    "node": {"rawId": "o1y9wo6q", "platforms": [{"name": "Nintendo 64"}, {"name": "Wii Virtual Console"}]}
                },
                {
                    "cursor": "Mg==",
                    "node": {"rawId": "pd0wq31e", "platforms": [{"name": "Wii Virtual Console"}, {"name": "Wii U"}]}
                }
            ],
            "pageInfo": {"hasNextPage": true, "hasPreviousPage": false}
        })
    );

    assert_eq!(server.received_requests().await.unwrap().len(), 4);
}

#[tokio::test]
async fn repeating_the_scope_filter_is_rejected() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/games/o1y9wo6q", json!({"data": game("o1y9wo6q", "Super Mario 64", &[])}), 1).await;

    let id = NodeKind::Game.global_id("o1y9wo6q");
    let query = format!(
        r#"{{ node(id: "{}") {{ ... on Game {{ runs(filter: {{ game: "pd0wq31e" }}) {{ edges {{ cursor }} }} }} }} }}"#,
        id.as_str()
    );

    let response = execute(&server, &query).await;
    let error = &response["errors"][0];

    insta::assert_snapshot!(error["message"].as_str().unwrap(), @"cannot filter runs by game when reading from a specific game");
    assert_eq!(error["extensions"]["code"], "BAD_REQUEST");

    // The guard runs before any list request goes out.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn moderated_games_reject_a_moderator_filter() {
    let server = MockServer::start().await;

    mount_json(
        &server,
        "/api/v1/users/zx7gd1yx",
        json!({"data": {
            "id": "zx7gd1yx",
            "names": {"international": "cheese05"},
            "name-style": {"style": "solid", "color": {"light": "#EE4444", "dark": "#EE4444"}},
            "role": "user"
        }}),
        1,
    )
    .await;

    let id = NodeKind::User.global_id("zx7gd1yx");
    let query = format!(
        r#"{{ node(id: "{}") {{ ... on User {{ moderatedGames(filter: {{ moderator: "zx7gd1yx" }}) {{ edges {{ cursor }} }} }} }} }}"#,
        id.as_str()
    );

    let response = execute(&server, &query).await;

    assert_eq!(
        response["errors"][0]["message"],
        "cannot filter games by moderator when reading from a specific user"
    );
}

#[tokio::test]
async fn node_resolves_users_by_global_id() {
    let server = MockServer::start().await;

    mount_json(
        &server,
        "/api/v1/users/zx7gd1yx",
        json!({"data": {
            "id": "zx7gd1yx",
            "names": {"international": "cheese05", "japanese": null},
            "weblink": "https://www.speedrun.com/user/cheese05",
            "name-style": {
                "style": "gradient",
                "color-from": {"light": "#EE4444", "dark": "#EE4444"},
                "color-to": {"light": "#4444EE", "dark": "#6666EE"}
            },
            "role": "trusted",
            "signup": "2014-07-12T04:46:20Z",
            "twitch": {"uri": "https://www.twitch.tv/cheese05"}
        }}),
        1,
    )
    .await;

    let id = NodeKind::User.global_id("zx7gd1yx");
    let query = format!(
        r#"{{ node(id: "{}") {{
            ... on User {{
                id
                name
                japanese: name(variant: JAPANESE)
                role
                twitch {{ rel uri }}
                nameStyle {{ ... on GradientUserNameStyle {{ colorTo {{ dark }} }} }}
            }}
        }} }}"#,
        id.as_str()
    );

    let response = execute(&server, &query).await;

    assert_eq!(
        response["data"]["node"],
        json!({
            "id": id.as_str(),
            "name": "cheese05",
            "japanese": null,
            "role": "TRUSTED",
            "twitch": {"rel": null, "uri": "https://www.twitch.tv/cheese05"},
            "nameStyle": {"colorTo": {"dark": "#6666EE"}}
        })
    );
}

#[tokio::test]
async fn unknown_node_kind_is_null() {
    let server = MockServer::start().await;

    let response = execute(&server, r#"{ node(id: "c2VyaWVzOmFiYw==") { __typename } }"#).await;

    assert_eq!(response["data"]["node"], Value::Null);
    assert!(response.get("errors").is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_node_id_is_an_error() {
    let server = MockServer::start().await;

    let response = execute(&server, r#"{ node(id: "not a global id") { __typename } }"#).await;

    assert_eq!(response["errors"][0]["extensions"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn full_game_run_resolves_a_null_level_without_a_request() {
    let server = MockServer::start().await;

    mount_json(
        &server,
        "/api/v1/runs/y8dwozoj",
        json!({"data": {
            "id": "y8dwozoj",
            "game": "o1y9wo6q",
            "category": "wkpoo02r",
            "level": null,
            "status": {"status": "verified", "examiner": "zx7gd1yx", "verify-date": "2019-12-09T21:56:41Z"},
            "players": [{"rel": "guest", "name": "Bob", "uri": "https://www.speedrun.com/api/v1/guests/Bob"}],
            "times": {"primary_t": 5809.0, "realtime_t": 5809.0, "ingame_t": 0}
        }}),
        1,
    )
    .await;

    let id = NodeKind::Run.global_id("y8dwozoj");
    let query = format!(
        r#"{{ node(id: "{}") {{
            ... on Run {{
                level {{ rawId }}
                time
                ingame: time(timing: INGAME)
                players {{ ... on GuestRunPlayer {{ name }} }}
            }}
        }} }}"#,
        id.as_str()
    );

    let response = execute(&server, &query).await;

    assert_eq!(
        response["data"]["node"],
        json!({
            "level": null,
            "time": 5809.0,
            "ingame": null,
            "players": [{"name": "Bob"}]
        })
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn upstream_failures_carry_a_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/games/o1y9wo6q"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let id = NodeKind::Game.global_id("o1y9wo6q");
    let query = format!(r#"{{ node(id: "{}") {{ __typename }} }}"#, id.as_str());

    let response = execute(&server, &query).await;

    assert_eq!(response["errors"][0]["extensions"]["code"], "UPSTREAM_STATUS");
}

#[tokio::test]
async fn leaderboard_runs_are_cut_at_first() {
    let server = MockServer::start().await;

    let run = |id: &str| {
        json!({
            "id": id,
            "game": "o1y9wo6q",
            "category": "wkpoo02r",
            "status": {"status": "verified"},
            "times": {"primary_t": 100.0}
        })
    };

    Mock::given(method("GET"))
        .and(path("/api/v1/leaderboards/o1y9wo6q/category/wkpoo02r"))
        .and(query_param("var-e8m7em86", "9qj7z0oq"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "game": "o1y9wo6q",
                "category": "wkpoo02r",
                "level": null,
                "timing": "realtime",
                "runs": [
                    {"place": 1, "run": run("y8dwozoj")},
                    {"place": 2, "run": run("z5l9eljy")},
                    {"place": 3, "run": run("mrr8dnqy")}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let variable = NodeKind::Variable.global_id("e8m7em86");
    let query = format!(
        r#"{{ viewer {{ leaderboard(game: "o1y9wo6q", category: "wkpoo02r", variables: [{{ id: "{}", value: "9qj7z0oq" }}]) {{
            timing
            level {{ rawId }}
            runs(first: 2) {{ place run {{ rawId }} }}
        }} }} }}"#,
        variable.as_str()
    );

    let response = execute(&server, &query).await;

    assert_eq!(
        response["data"]["viewer"]["leaderboard"],
        json!({
            "timing": "REALTIME",
            "level": null,
            "runs": [
                {"place": 1, "run": {"rawId": "y8dwozoj"}},
                {"place": 2, "run": {"rawId": "z5l9eljy"}}
            ]
        })
    );
}

#[tokio::test]
async fn game_fields_follow_the_upstream_maps() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/games/o1y9wo6q", json!({"data": game("o1y9wo6q", "Super Mario 64", &[])}), 1).await;

    let id = NodeKind::Game.global_id("o1y9wo6q");
    let query = format!(
        r#"{{ node(id: "{}") {{
            ... on Game {{
                name
                japanese: name(variant: JAPANESE)
                moderators {{ role }}
                assets {{ kind width }}
                icon: asset(kind: ICON) {{ uri }}
                ruleset {{ defaultRunTime }}
            }}
        }} }}"#,
        id.as_str()
    );

    let response = execute(&server, &query).await;

    assert_eq!(
        response["data"]["node"],
        json!({
            "name": "Super Mario 64",
            "japanese": null,
            "moderators": [{"role": "SUPER_MODERATOR"}],
            "assets": [{"kind": "LOGO", "width": 60}],
            "icon": null,
            "ruleset": {"defaultRunTime": "REALTIME"}
        })
    );
}
