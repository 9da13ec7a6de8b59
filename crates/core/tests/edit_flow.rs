//! End-to-end edit flow through the service layer with an in-memory
//! store standing in for the document database.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use coolcheck_core::error::CoreError;
use coolcheck_core::evaluate::EvalOptions;
use coolcheck_core::readings::{
    AirPurifierCondition, AmpReading, BlowerMotorType, CapacitorReading, CondenserFanMotor,
    DrainPanCondition, PrimaryDrainCondition, ReadingSet, RefrigerantStatus,
};
use coolcheck_core::report::{
    CustomerContact, EquipmentInfo, Report, ReportMeta, ReportPhotos, MAX_REPORT_EDITS,
};
use coolcheck_core::service::edit_report;
use coolcheck_core::store::ReportStore;
use coolcheck_core::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct InMemoryStore {
    reports: Mutex<HashMap<EntityId, Report>>,
}

#[async_trait]
impl ReportStore for InMemoryStore {
    async fn load(&self, report_id: EntityId) -> Result<Report, CoreError> {
        self.reports
            .lock()
            .unwrap()
            .get(&report_id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "report",
                id: report_id,
            })
    }

    async fn save(&self, report: &Report) -> Result<(), CoreError> {
        self.reports
            .lock()
            .unwrap()
            .insert(report.id, report.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn readings() -> ReadingSet {
    ReadingSet {
        blower_motor_type: BlowerMotorType::Psc,
        blower_capacitor: Some(CapacitorReading {
            rating_uf: 10.0,
            reading_uf: 9.8,
        }),
        condenser_capacitor_herm: CapacitorReading {
            rating_uf: 35.0,
            reading_uf: 34.0,
        },
        condenser_capacitor_fan: None,
        amp_draw: Some(AmpReading {
            actual_amps: 18.5,
            rated_amps: 19.0,
        }),
        return_temp_f: 77.0,
        supply_temp_f: 59.0,
        refrigerant_type: "R-410A".to_string(),
        refrigerant_status: RefrigerantStatus::Good,
        superheat_f: 9.0,
        subcooling_f: 11.0,
        primary_drain: PrimaryDrainCondition::Clear,
        primary_drain_notes: None,
        drain_pan: DrainPanCondition::GoodShape,
        air_purifier: AirPurifierCondition::Good,
        condenser_fan_motor: CondenserFanMotor::NormalOperation,
        air_filters: "Clean".to_string(),
        evaporator_coil: "Clean".to_string(),
        condenser_coils: "Clean".to_string(),
        plenums: "Good".to_string(),
        ductwork: "Good".to_string(),
        evaporator_age_years: Some(6),
        condenser_age_years: Some(6),
        notes: None,
        other_repair_recommendations: None,
    }
}

fn meta(technician_id: EntityId) -> ReportMeta {
    ReportMeta {
        technician_id,
        technician_name: "Dana Fields".to_string(),
        customer: CustomerContact {
            name: "Pat Serrano".to_string(),
            email: "pat@example.com".to_string(),
            phone: "555-0114".to_string(),
        },
        evaporator: EquipmentInfo {
            brand: "Trane".to_string(),
            model_number: "4TXC".to_string(),
            serial_number: "2019E11402".to_string(),
            warranty_status: "In warranty".to_string(),
        },
        condenser: EquipmentInfo {
            brand: "Trane".to_string(),
            model_number: "4TTR4".to_string(),
            serial_number: "2019E99015".to_string(),
            warranty_status: "In warranty".to_string(),
        },
    }
}

fn ts(secs: i64) -> Timestamp {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

async fn seed_report(store: &InMemoryStore, technician_id: EntityId) -> Report {
    let report = Report::new(
        meta(technician_id),
        readings(),
        ReportPhotos::default(),
        &EvalOptions::default(),
        ts(0),
    )
    .unwrap();
    store.save(&report).await.unwrap();
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn three_edits_then_limit() {
    let store = InMemoryStore::default();
    let tech = Uuid::new_v4();
    let report = seed_report(&store, tech).await;

    for edit in 1..=MAX_REPORT_EDITS {
        let (updated, snapshot) = edit_report(
            &store,
            report.id,
            tech,
            readings(),
            &EvalOptions::default(),
            ts(edit as i64 * 60),
        )
        .await
        .unwrap();
        assert_eq!(updated.edit_count, edit);
        assert_eq!(snapshot.label, format!("After Repair {edit}"));
    }

    let stored = store.load(report.id).await.unwrap();
    assert_eq!(stored.edit_count, 3);
    assert_eq!(stored.version, 4);
    assert_eq!(stored.versions.len(), 4);

    // The fourth edit is rejected and the stored report is untouched.
    let result = edit_report(
        &store,
        report.id,
        tech,
        readings(),
        &EvalOptions::default(),
        ts(9999),
    )
    .await;
    assert!(matches!(
        result,
        Err(CoreError::EditLimitExceeded { edit_count: 3 })
    ));
    let after = store.load(report.id).await.unwrap();
    assert_eq!(after, stored);
}

#[tokio::test]
async fn non_creator_cannot_edit() {
    let store = InMemoryStore::default();
    let tech = Uuid::new_v4();
    let report = seed_report(&store, tech).await;

    let result = edit_report(
        &store,
        report.id,
        Uuid::new_v4(),
        readings(),
        &EvalOptions::default(),
        ts(60),
    )
    .await;
    assert!(matches!(result, Err(CoreError::NotAuthorized(_))));

    let stored = store.load(report.id).await.unwrap();
    assert_eq!(stored.edit_count, 0);
    assert!(stored.versions.is_empty());
}

#[tokio::test]
async fn missing_report_is_not_found() {
    let store = InMemoryStore::default();
    let result = edit_report(
        &store,
        Uuid::new_v4(),
        Uuid::new_v4(),
        readings(),
        &EvalOptions::default(),
        ts(0),
    )
    .await;
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[tokio::test]
async fn edit_with_worse_readings_lowers_stored_score() {
    let store = InMemoryStore::default();
    let tech = Uuid::new_v4();
    let report = seed_report(&store, tech).await;
    assert_eq!(report.evaluation.performance_score, 100);

    let mut worse = readings();
    worse.refrigerant_status = RefrigerantStatus::Critical;
    worse.drain_pan = DrainPanCondition::PoorCondition;

    let (updated, _) = edit_report(
        &store,
        report.id,
        tech,
        worse,
        &EvalOptions::default(),
        ts(60),
    )
    .await
    .unwrap();

    // -20 refrigerant, -10 drain pan.
    assert_eq!(updated.evaluation.performance_score, 70);
    let stored = store.load(report.id).await.unwrap();
    assert_eq!(stored.evaluation.performance_score, 70);
    assert_eq!(stored.versions[0].evaluation.performance_score, 100);
}
