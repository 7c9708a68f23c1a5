//! End-to-end session behaviour: configure, submit, select, delete, render.

use gurney_core::presentation::{rows, VisualEncoding};
use gurney_core::{CalcError, Calculator, CalculatorConfig, RecordId, ResultStore};

fn submit(calculator: &Calculator, store: &mut ResultStore, alloy: &str, d: &str, t: &str) -> RecordId {
    let input = calculator.parse_input(alloy, d, t).unwrap();
    store.append(calculator.compute(&input).unwrap())
}

#[test]
fn reference_session() {
    let calculator = Calculator::new(CalculatorConfig::default()).unwrap();
    let mut store = ResultStore::new();

    let a = submit(&calculator, &mut store, "45KH", "50000", "1000");
    let b = submit(&calculator, &mut store, "40CrMnSiMoV", "30000", "1500");
    assert_eq!(store.len(), 2);

    let first = store.get(a).unwrap();
    assert_eq!(first.fragment_ratio, 50.0);
    assert!((first.efficiency - 0.17347).abs() < 1e-5);
    assert!((first.velocity_m_s - 1130.6706).abs() < 0.01);

    let table = rows(&store);
    assert_eq!(table[0].efficiency, "0.173");
    assert_eq!(table[1].efficiency, "0.212");
    assert_eq!(table[1].fragment_ratio, "20.000");

    store.toggle_select(b).unwrap();
    store.toggle_select(a).unwrap();
    let encodings = VisualEncoding::for_selection(&store.selected());
    assert_eq!(encodings.iter().map(|e| e.id).collect::<Vec<_>>(), vec![a, b]);

    // 40CrMnSiMoV has the higher efficiency and velocity
    assert_eq!(encodings[0].efficiency_ratio, 0.0);
    assert_eq!(encodings[1].efficiency_ratio, 1.0);
    assert_eq!(encodings[1].bar_duration_secs, 2.0);

    assert!(store.delete(b));
    let encodings = VisualEncoding::for_selection(&store.selected());
    assert_eq!(encodings.len(), 1);
    assert_eq!(encodings[0].efficiency_ratio, 0.0);
    assert_eq!(encodings[0].velocity_ratio, 0.0);
}

#[test]
fn rejected_input_creates_no_record() {
    let calculator = Calculator::reference();
    let mut store = ResultStore::new();

    for (alloy, d, t) in [("", "1", "1"), ("45KH", "x", "1"), ("45KH", "1", "0"), ("NOPE", "1", "1")] {
        let result = calculator.parse_input(alloy, d, t);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_recoverable());
    }
    assert!(store.is_empty());

    assert_eq!(
        store.toggle_select(RecordId(0)).unwrap_err(),
        CalcError::UnknownRecord { id: 0 }
    );
}

#[test]
fn custom_configuration() {
    let json = r#"{
        "global_constant": 5.0,
        "alloys": [
            { "id": "X", "ms_kg": 10.0, "density_kg_m3": 8000.0, "c_kg": 2.0 },
            { "id": "Y", "ms_kg": 5.0, "density_kg_m3": 8000.0, "c_kg": 2.0 }
        ]
    }"#;
    let calculator = Calculator::new(CalculatorConfig::from_json_str(json).unwrap()).unwrap();
    assert_eq!(calculator.list_ids(), vec!["X", "Y"]);
    assert_eq!(calculator.global_constant(), 5.0);

    let mut store = ResultStore::new();
    let id = submit(&calculator, &mut store, "Y", "10", "4");
    let record = store.get(id).unwrap();
    assert_eq!(record.fragment_ratio, 2.5);
    assert_eq!(record.efficiency, 0.4);
    // 2830 * (1 + 0.5)^-0.5
    assert!((record.velocity_m_s - 2830.0 / 1.5_f64.sqrt()).abs() < 1e-9);

    assert!(calculator.parse_input("45KH", "1", "1").is_err());
}

#[test]
fn misconfigured_catalog_is_fatal() {
    let json = r#"{ "alloys": [ { "id": "Z", "ms_kg": 0.0, "density_kg_m3": 1.0, "c_kg": 1.0 } ] }"#;
    let err = Calculator::new(CalculatorConfig::from_json_str(json).unwrap()).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CATALOG_ENTRY");
    assert!(!err.is_recoverable());
}
