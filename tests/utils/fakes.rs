/// Hand-written collaborators for driving `CollectionPointForm` in tests
use async_trait::async_trait;
use ecoleta_lib::modules::catalog::{ItemCatalogClient, ItemCategory};
use ecoleta_lib::modules::region::{MunicipalityName, RegionCode, RegionDirectoryClient};
use ecoleta_lib::modules::submission::{SubmissionClient, SubmissionReceipt, SubmissionRecord};
use ecoleta_lib::shared::errors::{AppError, AppResult};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn code(raw: &str) -> RegionCode {
    RegionCode::parse(raw).unwrap()
}

pub fn city(raw: &str) -> MunicipalityName {
    MunicipalityName::parse(raw).unwrap()
}

pub struct StaticCatalog {
    items: Vec<ItemCategory>,
}

impl StaticCatalog {
    pub fn with_ids(ids: &[i32]) -> Self {
        let items = ids
            .iter()
            .map(|id| {
                ItemCategory::new(
                    *id,
                    format!("Item {}", id),
                    format!("http://localhost:3333/uploads/{}.svg", id),
                )
                .unwrap()
            })
            .collect();
        Self { items }
    }
}

#[async_trait]
impl ItemCatalogClient for StaticCatalog {
    async fn list_items(&self) -> AppResult<Vec<ItemCategory>> {
        Ok(self.items.clone())
    }
}

/// Holds one municipality response until the test releases it.
#[derive(Default)]
pub struct Gate {
    pub started: Notify,
    pub release: Notify,
    fails: bool,
}

/// Region directory whose next municipality lookup can be held back per
/// region. A gate holds a single lookup; later lookups answer immediately.
pub struct GatedDirectory {
    municipalities: HashMap<String, Vec<MunicipalityName>>,
    gates: Mutex<HashMap<String, Arc<Gate>>>,
    pub lookups: Arc<Mutex<Vec<String>>>,
}

impl GatedDirectory {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let municipalities = entries
            .iter()
            .map(|(region, names)| {
                (
                    region.to_string(),
                    names.iter().map(|name| city(name)).collect(),
                )
            })
            .collect();
        Self {
            municipalities,
            gates: Mutex::new(HashMap::new()),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn gate(&mut self, region: &str) -> Arc<Gate> {
        self.install_gate(region, false)
    }

    /// Like `gate`, but the held lookup answers with a 503 once released.
    pub fn failing_gate(&mut self, region: &str) -> Arc<Gate> {
        self.install_gate(region, true)
    }

    fn install_gate(&mut self, region: &str, fails: bool) -> Arc<Gate> {
        let gate = Arc::new(Gate {
            fails,
            ..Gate::default()
        });
        self.gates
            .get_mut()
            .unwrap()
            .insert(region.to_string(), Arc::clone(&gate));
        gate
    }
}

#[async_trait]
impl RegionDirectoryClient for GatedDirectory {
    async fn list_regions(&self) -> AppResult<Vec<RegionCode>> {
        let mut regions: Vec<RegionCode> = self.municipalities.keys().map(|r| code(r)).collect();
        regions.sort();
        Ok(regions)
    }

    async fn list_municipalities(&self, region: &RegionCode) -> AppResult<Vec<MunicipalityName>> {
        self.lookups.lock().unwrap().push(region.to_string());

        let gate = self.gates.lock().unwrap().remove(region.as_str());
        if let Some(gate) = gate {
            gate.started.notify_one();
            gate.release.notified().await;
            if gate.fails {
                return Err(AppError::UpstreamError {
                    status: 503,
                    message: format!("Lookup for {} failed", region),
                });
            }
        }

        self.municipalities
            .get(region.as_str())
            .cloned()
            .ok_or_else(|| AppError::UpstreamError {
                status: 404,
                message: format!("No municipalities for {}", region),
            })
    }
}

/// Records every record it receives and answers from a queue of outcomes.
pub struct RecordingSubmissions {
    pub received: Arc<Mutex<Vec<SubmissionRecord>>>,
    outcomes: Mutex<VecDeque<AppResult<SubmissionReceipt>>>,
}

impl RecordingSubmissions {
    pub fn answering(outcomes: Vec<AppResult<SubmissionReceipt>>) -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        }
    }
}

#[async_trait]
impl SubmissionClient for RecordingSubmissions {
    async fn create_point(&self, record: &SubmissionRecord) -> AppResult<SubmissionReceipt> {
        self.received.lock().unwrap().push(record.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(SubmissionReceipt::default()))
    }
}
