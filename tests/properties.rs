use logic_lab_core::circuits::{self, decoder, encoder, gray, mux, seven_segment};
use logic_lab_core::signal::{from_index, to_index};
use logic_lab_core::{CircuitKind, InputChange, InputSet, Readout, Session, SessionConfig, Signal};

use proptest::prelude::*;

fn signals<const N: usize>() -> impl Strategy<Value = [Signal; N]> {
    (0..1usize << N).prop_map(from_index::<N>)
}

fn kind() -> impl Strategy<Value = CircuitKind> {
    prop::sample::select(CircuitKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn decoder_enabled_is_one_hot(select in signals::<3>()) {
        let outputs = decoder::decode(select, Signal::High);
        let hot: Vec<usize> = (0..8).filter(|&i| outputs[i].is_high()).collect();
        prop_assert_eq!(hot, vec![to_index(&select)]);
    }

    #[test]
    fn decoder_disabled_is_all_low(select in signals::<3>()) {
        prop_assert_eq!(decoder::decode(select, Signal::Low), [Signal::Low; 8]);
    }

    #[test]
    fn encoder_reports_highest_line(lines in signals::<8>()) {
        let [a2, a1, a0] = encoder::encode(lines);
        let code = to_index(&[a0, a1, a2]);
        match (0..8).rev().find(|&i| lines[i].is_high()) {
            Some(highest) => prop_assert_eq!(code, highest),
            None => prop_assert_eq!(code, 0),
        }
    }

    #[test]
    fn gray_follows_xor_recurrence(g in signals::<3>()) {
        let [g2, g1, g0] = g;
        let [b2, b1, b0] = gray::gray_to_binary(g);
        prop_assert_eq!(b2, g2);
        prop_assert_eq!(b1, b2 ^ g1);
        prop_assert_eq!(b0, b1 ^ g0);
    }

    #[test]
    fn mux_disabled_forces_both_low(data in signals::<8>(), select in signals::<3>()) {
        let out = mux::select(data, select, Signal::Low);
        prop_assert_eq!((out.y, out.y_not), (Signal::Low, Signal::Low));
    }

    #[test]
    fn mux_enabled_outputs_are_complements(data in signals::<8>(), select in signals::<3>()) {
        let out = mux::select(data, select, Signal::High);
        prop_assert_eq!(out.y, data[to_index(&select)]);
        prop_assert_eq!(out.y_not, !out.y);
    }

    #[test]
    fn bcd_readout_matches_value(bcd in signals::<4>()) {
        let value = to_index(&bcd);
        let (segments, readout) = seven_segment::decode_bcd(bcd);
        if value <= 9 {
            prop_assert_eq!(readout, Readout::Decimal(value as u8));
            prop_assert!(segments.iter().any(|s| s.is_high()));
        } else {
            prop_assert_eq!(readout, Readout::Invalid);
            prop_assert_eq!(segments, [Signal::Low; 7]);
        }
    }

    #[test]
    fn evaluation_is_idempotent(circuit in kind(), raw in any::<u16>()) {
        let bits: [Signal; 12] = from_index(raw as usize);
        let inputs = InputSet::from_values(circuit, &bits);
        prop_assert_eq!(circuits::evaluate(&inputs), circuits::evaluate(&inputs));
    }

    #[test]
    fn exclusive_encoder_keeps_one_line(toggles in prop::collection::vec(0..8usize, 1..20)) {
        let mut session = Session::new(SessionConfig::default());
        let enc = CircuitKind::PriorityEncoder8to3;
        for line in toggles {
            session.apply(&InputChange::toggle(enc, format!("Y{}", line))).unwrap();
        }
        let inputs = session.view(enc).unwrap().inputs();
        prop_assert!(inputs.values().iter().filter(|s| s.is_high()).count() <= 1);
    }
}

#[test]
fn encoder_y5_is_101() {
    let inputs = InputSet::new(CircuitKind::PriorityEncoder8to3)
        .with("Y5", Signal::High)
        .unwrap();
    assert_eq!(circuits::evaluate(&inputs).to_string(), "A2=1 A1=0 A0=1");
}

#[test]
fn command_line_encoder_inputs_keep_priority() {
    let config = SessionConfig::default();
    let enc = CircuitKind::PriorityEncoder8to3;
    for args in [["Y6=1", "Y2=1"], ["Y2=1", "Y6=1"]] {
        let inputs = config.initial_inputs(enc).with_assignments(args).unwrap();
        assert_eq!(circuits::evaluate(&inputs).to_string(), "A2=1 A1=1 A0=0");
    }
}

#[test]
fn gray_110_is_100() {
    let inputs = InputSet::new(CircuitKind::GrayToBinary3bit)
        .with("G2", Signal::High)
        .and_then(|s| s.with("G1", Signal::High))
        .unwrap();
    assert_eq!(circuits::evaluate(&inputs).to_string(), "B2=1 B1=0 B0=0");
}

#[test]
fn mux_routes_i3() {
    let mut session = Session::new(SessionConfig::default());
    let mux = CircuitKind::Multiplexer8to1;
    for pin in ["I3", "S0", "S1"] {
        session.apply(&InputChange::set(mux, pin, Signal::High)).unwrap();
    }
    let out = session.view(mux).unwrap().outputs();
    assert_eq!(out.get("Y"), Some(Signal::High));
    assert_eq!(out.get("Y'"), Some(Signal::Low));

    let out = session.apply(&InputChange::set(mux, "EN", Signal::Low)).unwrap();
    assert_eq!(out.get("Y"), Some(Signal::Low));
    assert_eq!(out.get("Y'"), Some(Signal::Low));
}

#[test]
fn bcd_nine_and_thirteen() {
    let nine = InputSet::new(CircuitKind::BcdTo7Segment)
        .with("A", Signal::High)
        .and_then(|s| s.with("D", Signal::High))
        .unwrap();
    let out = circuits::evaluate(&nine);
    let bits: Vec<u8> = out.values().iter().map(|s| s.bit()).collect();
    assert_eq!(bits, vec![1, 1, 1, 1, 0, 1, 1]);
    assert_eq!(out.readout(), Some(Readout::Decimal(9)));

    let thirteen = nine.with("C", Signal::High).unwrap();
    let out = circuits::evaluate(&thirteen);
    assert!(out.values().iter().all(|s| !s.is_high()));
    assert_eq!(out.readout().map(|r| r.to_string()), Some("-".to_string()));
}
