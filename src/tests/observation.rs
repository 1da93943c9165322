use crate::{
    prelude::{Category, Code, ObservationRecord, Session},
    tests::{bds, gps, init_logger, observation, reference_epoch},
};

fn log_observations(session: Session<Vec<u8>>, observations: &[ObservationRecord]) -> String {
    init_logger();
    let mut session = session;
    session.log_observations(observations);
    let buf = session
        .take_writer(Category::Observation)
        .expect("observation writer should be available");
    String::from_utf8(buf).unwrap()
}

#[test]
fn snr_conversion() {
    let obs = observation(gps(1), reference_epoch());
    assert_eq!(obs.snr_dbhz(0.25), [100.0, 45.0]);
    assert_eq!(obs.snr_dbhz(1.0), [400.0, 180.0]);
}

#[test]
fn two_observations() {
    let t = reference_epoch();
    let session = Session::from_writers(None, Some(Vec::new()), None);

    let content = log_observations(session, &[observation(gps(1), t), observation(bds(7), t)]);
    let lines = content.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        " ( 1) 2024/01/01 00:00:00.000 G01 L0=120000000.123 L1= 93500000.250 P0= 22000000.500 P1= 22000003.750 LLI0=0x01 LLI1=0x00 SNR0=100.0 SNR1=45.0 1C 2W"
    );
    assert!(lines[1].starts_with(" ( 2) 2024/01/01 00:00:00.000 C07 "));
    assert_eq!(lines[2], "");
}

#[test]
fn custom_snr_unit() {
    let session = Session::from_writers(None, Some(Vec::new()), None).with_snr_unit(0.001);
    let content = log_observations(session, &[observation(gps(1), reference_epoch())]);
    assert!(content.contains("SNR0=0.4 SNR1=0.2 "), "{}", content);
}

#[test]
fn untracked_codes() {
    let mut obs = observation(gps(3), reference_epoch());
    obs.codes = [Some(Code::L1C), None];
    obs.lli = [0x0a, 0xff];

    let session = Session::from_writers(None, Some(Vec::new()), None);
    let content = log_observations(session, &[obs]);
    let line = content.lines().next().unwrap();

    assert!(line.contains("LLI0=0x0a LLI1=0xff"));
    assert!(line.ends_with("SNR1=45.0 1C "), "{}", line);
}

#[test]
fn empty_batch() {
    let session = Session::from_writers(None, Some(Vec::new()), None);
    let content = log_observations(session, &[]);
    assert_eq!(content, "\n");
}

#[test]
fn disabled_observations() {
    let mut session: Session<Vec<u8>> = Session::default();
    session.log_observations(&[observation(gps(1), reference_epoch())]);

    for category in Category::ALL {
        assert!(session.writer(category).is_none());
        assert!(session.take_writer(category).is_none());
    }
}
