//! File round-trips for synthetic events.

use rand::SeedableRng;
use rand::rngs::StdRng;

use oread_io::{
    EchoSpec, InjectionConfig, RingdownSpec, read_strain_txt, synthesize_event, write_strain_txt,
};

#[test]
fn synthetic_event_survives_write_read_cycle() {
    let config = InjectionConfig::new()
        .with_sample_rate(1024.0)
        .with_duration(2.0)
        .with_start_time(1126259445.0)
        .with_ringdown(RingdownSpec::new().with_onset_time(1126259446.0))
        .with_echo(EchoSpec::new(1126259446.1003))
        .with_noise_sigma(2e-22);
    let mut rng = StdRng::seed_from_u64(77);
    let series = synthesize_event(&config, &mut rng).unwrap();

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("injected.txt");
    write_strain_txt(&path, &series).unwrap();

    let back = read_strain_txt(&path).unwrap();
    assert_eq!(back.len(), series.len());
    assert_eq!(back.sample_rate(), series.sample_rate());
    assert_eq!(back.start_time(), series.start_time());
    // Shortest round-trip float formatting keeps the samples bit-exact
    assert_eq!(back.samples(), series.samples());
}
