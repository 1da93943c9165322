use crate::{
    prelude::{Category, SatellitePosition, Session},
    tests::{gps, init_logger, observation, position, reference_epoch, transmission_epoch},
};

fn satellite_position(health: u8) -> SatellitePosition {
    SatellitePosition {
        transmission_epoch: transmission_epoch(reference_epoch()),
        position_m: position(),
        clock_bias_s: 1.2345E-4,
        clock_drift_s_s: 1.0E-12,
        variance_m2: 0.5,
        health,
    }
}

fn session() -> Session<Vec<u8>> {
    init_logger();
    Session::from_writers(None, None, Some(Vec::new()))
}

fn content(mut session: Session<Vec<u8>>) -> String {
    let buf = session
        .take_writer(Category::SatellitePosition)
        .expect("satpos writer should be available");
    String::from_utf8(buf).unwrap()
}

#[test]
fn satellite_positions() {
    let t = reference_epoch();
    let mut session = session();

    session.log_satellite_positions(
        &[observation(gps(1), t), observation(gps(14), t)],
        &[satellite_position(5), satellite_position(0xaf)],
    );

    let content = content(session);
    let lines = content.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "G01 obs_time=2024/01/01 00:00:00.000000 t_time=2023/12/31 23:59:59.930000 rs= 15000000.000 -20000000.500   8000000.250 dts= 0.000123450000 var= 0.5000000 svh=05"
    );
    assert!(lines[1].starts_with("G14 "));
    assert!(lines[1].ends_with(" svh=AF"));
    assert_eq!(lines[2], "");
}

#[test]
fn mismatched_lengths() {
    let t = reference_epoch();
    let mut session = session();

    session.log_satellite_positions(
        &[observation(gps(1), t), observation(gps(2), t)],
        &[satellite_position(0)],
    );

    let content = content(session);
    assert_eq!(content.lines().count(), 2);
    assert!(content.starts_with("G01 "));
    assert!(!content.contains("G02"));
}

#[test]
fn disabled_satellite_positions() {
    let t = reference_epoch();
    let mut session = Session::from_writers(Some(Vec::new()), Some(Vec::new()), None);

    session.log_satellite_positions(&[observation(gps(1), t)], &[satellite_position(0)]);

    assert!(session.writer(Category::SatellitePosition).is_none());
    assert!(session.writer(Category::Ssr).unwrap().is_empty());
    assert!(session.writer(Category::Observation).unwrap().is_empty());
}
