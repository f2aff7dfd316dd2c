// tests/integration_network.rs
//! Loading networks from files, answering route queries and exporting routes.

use std::fs;

use flycombi_core::error::NetworkError;
use flycombi_core::network::export::export_routes;
use flycombi_core::network::loader::{parse_flights, FlightLoad};
use flycombi_core::network::routes::{self, Route};
use flycombi_core::network::{self as net, FlightNetwork, Metric};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

const AIRPORTS: &str = "\
Buenos Aires,EZE,-34.8,-58.5
Buenos Aires,AEP,-34.5,-58.4
Santiago,SCL,-33.4,-70.8
Lima,LIM,-12.0,-77.1
Sao Paulo,GRU,-23.4,-46.5
Bogota,BOG,4.7,-74.1
";

const FLIGHTS: &str = "\
EZE,SCL,130,250,20
AEP,SCL,120,180,8
SCL,LIM,220,300,10
EZE,GRU,160,220,25
GRU,LIM,300,500,4
LIM,BOG,190,200,12
GRU,BOG,400,450,3
";

fn fixture() -> (TempDir, FlightNetwork) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let airports = dir.path().join("aeropuertos.csv");
    let flights = dir.path().join("vuelos.csv");
    fs::write(&airports, AIRPORTS).expect("failed to write airports");
    fs::write(&flights, FLIGHTS).expect("failed to write flights");
    let network = net::load(&airports, &flights).expect("fixture is valid");
    (dir, network)
}

#[test]
fn test_load_counts() {
    let (_dir, network) = fixture();
    assert_eq!(network.airport_count(), 6);
    assert_eq!(network.route_count(), 7);
    assert_eq!(network.city_of("AEP"), Some("Buenos Aires"));
    assert_eq!(
        network.airports_of("Buenos Aires").expect("known city"),
        ["EZE".to_string(), "AEP".to_string()]
    );
}

#[test]
fn test_cheapest_and_fastest_routes() {
    let (_dir, network) = fixture();

    let cheapest = routes::best_route(&network, Metric::Price, "Buenos Aires", "Bogota")
        .expect("cities exist")
        .expect("reachable");
    assert_eq!(cheapest.airports, ["EZE", "GRU", "BOG"]);
    assert_eq!(cheapest.cost, 670.0);

    let fastest = routes::best_route(&network, Metric::Time, "Buenos Aires", "Bogota")
        .expect("cities exist")
        .expect("reachable");
    assert_eq!(
        fastest,
        Route {
            airports: vec!["AEP".into(), "SCL".into(), "LIM".into(), "BOG".into()],
            cost: 530.0,
        }
    );
}

#[test]
fn test_fewest_stops_ignores_time() {
    let (_dir, network) = fixture();
    let route = routes::fewest_stops(&network, "Buenos Aires", "Bogota")
        .expect("cities exist")
        .expect("reachable");
    assert_eq!(route.airports, ["EZE", "GRU", "BOG"]);
    assert_eq!(route.cost, 2.0);
}

#[test]
fn test_vacation_returns_to_start() {
    let (_dir, network) = fixture();
    let tour = routes::vacation(&network, "Lima", 4, None)
        .expect("city exists")
        .expect("LIM-SCL-EZE-GRU-LIM");
    assert_eq!(tour.len(), 5);
    assert_eq!(tour.first(), tour.last());
    for pair in tour.windows(2) {
        assert!(network.graph(Metric::Time).is_adjacent(&pair[0], &pair[1]));
    }
}

#[test]
fn test_new_airline_file_reloads() {
    let (dir, network) = fixture();
    let tree = routes::new_airline(&network, &mut StdRng::seed_from_u64(4));
    let out = dir.path().join("rutas.csv");
    let written = export_routes(&network, &tree, &out).expect("writable temp dir");
    assert_eq!(written, 5);

    let content = fs::read_to_string(&out).expect("file was written");
    assert_eq!(content.lines().count(), 5);

    let mut reloaded = FlightNetwork::new();
    for airport in ["EZE", "AEP", "SCL", "LIM", "GRU", "BOG"] {
        reloaded.add_airport(airport, airport);
    }
    let load = parse_flights(&mut reloaded, &out, &content).expect("export is loadable");
    assert_eq!(load, FlightLoad { added: 5, skipped: 0 });

    let price: f64 = reloaded
        .graph(Metric::Price)
        .edges()
        .iter()
        .map(|(_, w)| w)
        .sum();
    // AEP-SCL 180, EZE-SCL 250, SCL-LIM 300, LIM-BOG 200, EZE-GRU 220.
    assert_eq!(price, 1150.0);
}

#[test]
fn test_parse_error_names_file_and_line() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let airports = dir.path().join("a.csv");
    let flights = dir.path().join("f.csv");
    fs::write(&airports, AIRPORTS).expect("write");
    fs::write(&flights, "EZE,SCL,130,250,20\nEZE,LIM,x,1,1\n").expect("write");

    let err = net::load(&airports, &flights).expect_err("second flight is malformed");
    assert!(matches!(err, NetworkError::Parse { line: 2, .. }));
    assert!(err.to_string().contains("f.csv:2"));
}

#[test]
fn test_unknown_city_error() {
    let (_dir, network) = fixture();
    let err = routes::fewest_stops(&network, "Quito", "Lima").expect_err("no such city");
    assert_eq!(err.to_string(), "unknown city: Quito");
}
