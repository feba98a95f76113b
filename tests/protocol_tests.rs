use seabattle::{
    decode, parse_room_list, CellState, ClientMessage, Coordinate, Orientation, Placement,
    ProtocolError, ServerMessage, ShipType,
};
use serde_json::json;

#[test]
fn decodes_place_ships_updates() {
    let message = decode(r#"{"type":"PlaceShips","players":1,"board":null}"#).unwrap();
    assert_eq!(
        message,
        ServerMessage::PlaceShips {
            players: 1,
            board: None,
        }
    );

    let message = decode(r#"{"type":"PlaceShips","players":2}"#).unwrap();
    assert_eq!(
        message,
        ServerMessage::PlaceShips {
            players: 2,
            board: None,
        }
    );

    let message = decode(r#"{"type":"PlaceShips","players":2,"board":{"cells":[]}}"#).unwrap();
    match message {
        ServerMessage::PlaceShips { players, board } => {
            assert_eq!(players, 2);
            assert!(board.is_some());
        }
        other => panic!("unexpected message: {:?}", other),
    }
}

#[test]
fn decodes_attack_ships_snapshots() {
    let raw = r#"{
        "type": "AttackShips",
        "yourTurn": true,
        "yourBoard": [[{"row":0,"column":0},"Miss"],[{"row":3,"column":4},"HitShip"]],
        "opponentBoard": null
    }"#;
    let message = decode(raw).unwrap();
    assert_eq!(
        message,
        ServerMessage::AttackShips {
            your_turn: true,
            your_board: vec![
                (Coordinate::new(0, 0), CellState::Miss),
                (Coordinate::new(3, 4), CellState::HitShip),
            ],
            opponent_board: None,
        }
    );

    let raw = r#"{
        "type": "AttackShips",
        "yourTurn": false,
        "yourBoard": [],
        "opponentBoard": [[{"row":5,"column":5},"Ship"]]
    }"#;
    let message = decode(raw).unwrap();
    assert_eq!(
        message,
        ServerMessage::AttackShips {
            your_turn: false,
            your_board: vec![],
            opponent_board: Some(vec![(Coordinate::new(5, 5), CellState::Ship)]),
        }
    );
}

#[test]
fn decodes_win_and_error() {
    assert_eq!(
        decode(r#"{"type":"Win","winner":"Alice","loser":"Bob"}"#).unwrap(),
        ServerMessage::Win {
            winner: "Alice".to_string(),
            loser: "Bob".to_string(),
        }
    );
    assert_eq!(
        decode(r#"{"type":"Error","error":"Player not found."}"#).unwrap(),
        ServerMessage::Error {
            error: "Player not found.".to_string(),
        }
    );
}

#[test]
fn bare_text_verdicts_become_error_envelopes() {
    for (raw, expected) in [
        ("ShipOutOfBounds", "Ship placement is out of bounds!"),
        ("ShipsAreIntersecting", "Placed ships are intersecting!"),
        ("WrongAmountOfShips", "Wrong amount of placed ships!"),
    ] {
        assert_eq!(
            decode(raw).unwrap(),
            ServerMessage::Error {
                error: expected.to_string(),
            }
        );
    }
}

#[test]
fn unknown_payloads_are_rejected_without_panicking() {
    for raw in ["", "garbage", "{\"type\":\"Unknown\"}", "{not json"] {
        assert_eq!(decode(raw).unwrap_err(), ProtocolError::Unrecognized);
    }
    assert_eq!(
        ProtocolError::Unrecognized.to_string(),
        "Unexpected message from server."
    );
}

#[test]
fn attack_intent_matches_the_wire_shape() {
    let message = ClientMessage::AttackShips {
        coordinate: Coordinate::new(3, 4),
    };
    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({
            "type": "AttackShips",
            "coordinate": {"row": 3, "column": 4},
        })
    );
}

#[test]
fn placement_intent_matches_the_wire_shape() {
    let message = ClientMessage::PlaceShips {
        placements: vec![Placement {
            ship_type: ShipType::Destroyer,
            start_coordinate: Coordinate::new(5, 5),
            orientation: Orientation::Horizontal,
        }],
    };
    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({
            "type": "PlaceShips",
            "placements": [{
                "shipType": "Destroyer",
                "startCoordinate": {"row": 5, "column": 5},
                "orientation": "Horizontal",
            }],
        })
    );
}

#[test]
fn room_list_parses_the_lobby_shape() {
    let raw = r#"[{
        "id": "r1",
        "players": 2,
        "playersNames": ["Alice", "Bob"],
        "roomName": "Pacific",
        "sunkShips": {"Alice": ["Destroyer"], "Bob": []},
        "hasEnded": false
    }]"#;
    let rooms = parse_room_list(raw).unwrap();
    assert_eq!(rooms.len(), 1);
    let room = &rooms[0];
    assert_eq!(room.id, "r1");
    assert_eq!(room.room_name, "Pacific");
    assert_eq!(room.players, 2);
    assert!(!room.has_ended);
    assert_eq!(room.sunk_ships_of("Alice"), &[ShipType::Destroyer]);
    assert!(room.sunk_ships_of("Carol").is_empty());
    assert_eq!(room.opponent_of("Alice"), Some("Bob"));

    assert_eq!(
        parse_room_list("not json").unwrap_err(),
        ProtocolError::Unrecognized
    );
}
