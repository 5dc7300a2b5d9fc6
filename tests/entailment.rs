use resolvent::errors::EntailmentError;
use resolvent::formulas::{Formula, FormulaFactory, ToFormula};
use resolvent::knowledge::KnowledgeBaseBuilder;
use resolvent::solver::{entails, ResolutionConfig, ResolutionEngine};

/// A vehicle snapshot reduced to the boolean facts the traffic rules are
/// written over, in the way a CSV-loading front end would provide them.
struct VehicleFacts {
    red: bool,
    speed_above_5: bool,
    speed_above_40: bool,
    speed_above_60: bool,
    is_bus: bool,
    in_bus_lane_hours: bool,
    school_zone: bool,
    in_school_hours: bool,
    erp_active: bool,
    erp_charge_violation: bool,
}

fn traffic_kb(f: &FormulaFactory, facts: &VehicleFacts) -> Vec<Formula> {
    let mut kb = KnowledgeBaseBuilder::new(f);
    kb.fact("red", facts.red);
    kb.fact("speed_above_5", facts.speed_above_5);
    kb.fact("speed_above_40", facts.speed_above_40);
    kb.fact("speed_above_60", facts.speed_above_60);
    kb.fact("is_bus", facts.is_bus);
    kb.fact("in_bus_lane_hours", facts.in_bus_lane_hours);
    kb.fact("school_zone", facts.school_zone);
    kb.fact("in_school_hours", facts.in_school_hours);
    kb.fact("erp_active", facts.erp_active);
    kb.fact("erp_charge_violation", facts.erp_charge_violation);

    kb.rule(&["red", "speed_above_5"], "RedLightViolation");
    kb.rule(&["speed_above_60"], "SpeedingViolation");
    kb.rule(&["school_zone", "in_school_hours", "speed_above_40"], "SchoolZoneSpeedingViolation");
    kb.sentence("is_bus | ~in_bus_lane_hours | BusLaneViolation".to_formula(f));
    kb.rule(&["erp_active", "erp_charge_violation"], "ERPViolation");
    kb.build()
}

fn check(f: &FormulaFactory, kb: &[Formula], violation: &str) -> bool {
    entails(kb, &f.variable(violation), f).unwrap()
}

#[test]
fn speeding_car_in_school_zone() {
    let f = FormulaFactory::new();
    let kb = traffic_kb(
        &f,
        &VehicleFacts {
            red: false,
            speed_above_5: true,
            speed_above_40: true,
            speed_above_60: true,
            is_bus: false,
            in_bus_lane_hours: false,
            school_zone: true,
            in_school_hours: true,
            erp_active: false,
            erp_charge_violation: false,
        },
    );

    assert!(check(&f, &kb, "SpeedingViolation"));
    assert!(check(&f, &kb, "SchoolZoneSpeedingViolation"));
    assert!(!check(&f, &kb, "RedLightViolation"));
    assert!(!check(&f, &kb, "BusLaneViolation"));
    assert!(!check(&f, &kb, "ERPViolation"));
}

#[test]
fn car_running_a_red_light() {
    let f = FormulaFactory::new();
    let kb = traffic_kb(
        &f,
        &VehicleFacts {
            red: true,
            speed_above_5: true,
            speed_above_40: false,
            speed_above_60: false,
            is_bus: false,
            in_bus_lane_hours: true,
            school_zone: false,
            in_school_hours: false,
            erp_active: true,
            erp_charge_violation: true,
        },
    );

    assert!(check(&f, &kb, "RedLightViolation"));
    assert!(check(&f, &kb, "BusLaneViolation"));
    assert!(check(&f, &kb, "ERPViolation"));
    assert!(!check(&f, &kb, "SpeedingViolation"));
    assert!(!check(&f, &kb, "SchoolZoneSpeedingViolation"));
}

#[test]
fn bus_is_exempt_from_the_bus_lane_rule() {
    let f = FormulaFactory::new();
    let kb = traffic_kb(
        &f,
        &VehicleFacts {
            red: false,
            speed_above_5: true,
            speed_above_40: false,
            speed_above_60: false,
            is_bus: true,
            in_bus_lane_hours: true,
            school_zone: false,
            in_school_hours: false,
            erp_active: false,
            erp_charge_violation: false,
        },
    );

    assert!(!check(&f, &kb, "BusLaneViolation"));
}

#[test]
fn stopped_car_at_a_red_light_is_not_a_violation() {
    let f = FormulaFactory::new();
    let kb = traffic_kb(
        &f,
        &VehicleFacts {
            red: true,
            speed_above_5: false,
            speed_above_40: false,
            speed_above_60: false,
            is_bus: false,
            in_bus_lane_hours: false,
            school_zone: false,
            in_school_hours: false,
            erp_active: false,
            erp_charge_violation: false,
        },
    );

    assert!(!check(&f, &kb, "RedLightViolation"));
}

#[test]
fn checks_for_different_vehicles_are_independent() {
    let f = FormulaFactory::new();
    let engine = ResolutionEngine::new();

    let speeder = traffic_kb(
        &f,
        &VehicleFacts {
            red: false,
            speed_above_5: true,
            speed_above_40: true,
            speed_above_60: true,
            is_bus: false,
            in_bus_lane_hours: false,
            school_zone: false,
            in_school_hours: false,
            erp_active: false,
            erp_charge_violation: false,
        },
    );
    let law_abiding = traffic_kb(
        &f,
        &VehicleFacts {
            red: false,
            speed_above_5: true,
            speed_above_40: false,
            speed_above_60: false,
            is_bus: false,
            in_bus_lane_hours: false,
            school_zone: false,
            in_school_hours: false,
            erp_active: false,
            erp_charge_violation: false,
        },
    );

    let query = f.variable("SpeedingViolation");
    // one engine, interleaved checks; no state leaks between calls
    assert_eq!(engine.entails(&speeder, &query, &f), Ok(true));
    assert_eq!(engine.entails(&law_abiding, &query, &f), Ok(false));
    assert_eq!(engine.entails(&speeder, &query, &f), Ok(true));
}

#[test]
fn malformed_rule_surfaces_an_error_instead_of_a_verdict() {
    let f = FormulaFactory::new();
    let mut kb = KnowledgeBaseBuilder::new(&f);
    kb.fact("red", true);
    kb.sentence(f.not("red => RedLightViolation".to_formula(&f)));

    let result = entails(&kb.build(), &f.variable("RedLightViolation"), &f);
    assert!(matches!(result, Err(EntailmentError::UnsupportedFormula(_))));
}

#[test]
fn tight_bounds_surface_resource_exhaustion() {
    let f = FormulaFactory::new();
    let kb = vec![
        "a | b".to_formula(&f),
        "~a | c".to_formula(&f),
        "~b | d".to_formula(&f),
        "~c | ~d | e".to_formula(&f),
    ];
    let engine = ResolutionEngine::with_config(ResolutionConfig { max_rounds: 1_000, max_clauses: 5 });
    let result = engine.entails(&kb, &f.variable("q"), &f);
    assert!(matches!(result, Err(EntailmentError::ResourceExhausted { .. })));
}
