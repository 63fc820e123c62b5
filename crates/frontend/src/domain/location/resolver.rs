//! Per-address caches for the dependent district/municipality dropdowns.
//!
//! Each address row owns a cell keyed by a stable `Uuid`, not by its index,
//! so removing a row can never leak its option lists into the row that
//! slides into its place. Responses of in-flight fetches carry the
//! generation token handed out when the fetch started; a response whose
//! token no longer matches (the selection changed again, or the row was
//! removed) is dropped on the floor.

use super::model;
use contracts::domain::location::{District, Municipality, Province};
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressOptions {
    pub districts: Vec<District>,
    pub municipalities: Vec<Municipality>,
    district_generation: u64,
    municipality_generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddressCell {
    pub key: Uuid,
    pub options: AddressOptions,
}

fn cell_mut(cells: &mut [AddressCell], key: Uuid) -> Option<&mut AddressCell> {
    cells.iter_mut().find(|c| c.key == key)
}

fn cell(cells: &[AddressCell], key: Uuid) -> Option<&AddressCell> {
    cells.iter().find(|c| c.key == key)
}

fn ensure_cell(cells: &mut Vec<AddressCell>, key: Uuid) {
    if cell(cells, key).is_none() {
        cells.push(AddressCell {
            key,
            options: AddressOptions::default(),
        });
    }
}

fn remove_cell(cells: &mut Vec<AddressCell>, key: Uuid) {
    cells.retain(|c| c.key != key);
}

/// Province changed (or was cleared): both dependent lists are now wrong.
/// Bumping both generations also fences out any response still in flight.
/// Returns the token a district fetch for the new province must present.
fn begin_district_fetch(cells: &mut [AddressCell], key: Uuid) -> Option<u64> {
    let cell = cell_mut(cells, key)?;
    cell.options.districts.clear();
    cell.options.municipalities.clear();
    cell.options.district_generation += 1;
    cell.options.municipality_generation += 1;
    Some(cell.options.district_generation)
}

fn apply_districts(cells: &mut [AddressCell], key: Uuid, token: u64, items: Vec<District>) -> bool {
    match cell_mut(cells, key) {
        Some(cell) if cell.options.district_generation == token => {
            cell.options.districts = items;
            true
        }
        _ => false,
    }
}

fn begin_municipality_fetch(cells: &mut [AddressCell], key: Uuid) -> Option<u64> {
    let cell = cell_mut(cells, key)?;
    cell.options.municipalities.clear();
    cell.options.municipality_generation += 1;
    Some(cell.options.municipality_generation)
}

fn apply_municipalities(
    cells: &mut [AddressCell],
    key: Uuid,
    token: u64,
    items: Vec<Municipality>,
) -> bool {
    match cell_mut(cells, key) {
        Some(cell) if cell.options.municipality_generation == token => {
            cell.options.municipalities = items;
            true
        }
        _ => false,
    }
}

/// Copy `from`'s option lists into `to`, fencing out fetches still in
/// flight for `to`. Used by "temporary address same as permanent".
fn copy_options(cells: &mut [AddressCell], from: Uuid, to: Uuid) -> bool {
    let Some(source) = cell(cells, from).map(|c| c.options.clone()) else {
        return false;
    };
    match cell_mut(cells, to) {
        Some(target) => {
            target.options.districts = source.districts;
            target.options.municipalities = source.municipalities;
            target.options.district_generation += 1;
            target.options.municipality_generation += 1;
            true
        }
        None => false,
    }
}

/// Reactive facade over the cells, shared by the wizard and the edit page.
#[derive(Clone, Copy)]
pub struct LocationResolver {
    pub provinces: RwSignal<Vec<Province>>,
    cells: RwSignal<Vec<AddressCell>>,
}

impl LocationResolver {
    pub fn new() -> Self {
        Self {
            provinces: RwSignal::new(Vec::new()),
            cells: RwSignal::new(Vec::new()),
        }
    }

    pub fn load_provinces(&self) {
        let provinces = self.provinces;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_provinces().await {
                Ok(items) => provinces.set(items),
                Err(e) => log::error!("loading provinces failed: {}", e),
            }
        });
    }

    pub fn add_cell(&self, key: Uuid) {
        self.cells.update(|c| ensure_cell(c, key));
    }

    pub fn remove_cell(&self, key: Uuid) {
        self.cells.update(|c| remove_cell(c, key));
    }

    /// Province was cleared: empty and fence both dependent lists.
    pub fn invalidate(&self, key: Uuid) {
        self.cells.update(|c| {
            begin_district_fetch(c, key);
        });
    }

    /// District was cleared: empty and fence the municipality list.
    pub fn invalidate_municipalities(&self, key: Uuid) {
        self.cells.update(|c| {
            begin_municipality_fetch(c, key);
        });
    }

    pub fn load_districts(&self, key: Uuid, province_id: u32) {
        let cells = self.cells;
        let Some(token) = cells.try_update(|c| begin_district_fetch(c, key)).flatten() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_districts(province_id).await {
                Ok(items) => cells.update(|c| {
                    apply_districts(c, key, token, items);
                }),
                Err(e) => log::error!("loading districts failed: {}", e),
            }
        });
    }

    pub fn load_municipalities(&self, key: Uuid, district_id: u32) {
        let cells = self.cells;
        let Some(token) = cells
            .try_update(|c| begin_municipality_fetch(c, key))
            .flatten()
        else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_municipalities(district_id).await {
                Ok(items) => cells.update(|c| {
                    apply_municipalities(c, key, token, items);
                }),
                Err(e) => log::error!("loading municipalities failed: {}", e),
            }
        });
    }

    pub fn mirror(&self, from: Uuid, to: Uuid) {
        self.cells.update(|c| {
            copy_options(c, from, to);
        });
    }

    /// Replay the cascade for a saved address so the dependent selects
    /// contain the saved values before they are applied. Sequential on
    /// purpose: municipalities are scoped by the fetched district.
    pub async fn hydrate_cell(&self, key: Uuid, province_id: Option<u32>, district_id: Option<u32>) {
        let Some(pid) = province_id else { return };
        let cells = self.cells;
        let Some(token) = cells.try_update(|c| begin_district_fetch(c, key)).flatten() else {
            return;
        };
        match model::fetch_districts(pid).await {
            Ok(items) => cells.update(|c| {
                apply_districts(c, key, token, items);
            }),
            Err(e) => {
                log::error!("loading districts failed: {}", e);
                return;
            }
        }

        let Some(did) = district_id else { return };
        let Some(token) = cells
            .try_update(|c| begin_municipality_fetch(c, key))
            .flatten()
        else {
            return;
        };
        match model::fetch_municipalities(did).await {
            Ok(items) => cells.update(|c| {
                apply_municipalities(c, key, token, items);
            }),
            Err(e) => log::error!("loading municipalities failed: {}", e),
        }
    }

    pub fn province_options(&self) -> Vec<(String, String)> {
        self.provinces
            .get()
            .iter()
            .map(|p| (p.province_id.to_string(), p.province_name.clone()))
            .collect()
    }

    pub fn district_options(&self, key: Uuid) -> Vec<(String, String)> {
        self.cells.with(|c| {
            cell(c, key)
                .map(|cell| {
                    cell.options
                        .districts
                        .iter()
                        .map(|d| (d.district_id.to_string(), d.district_name.clone()))
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    pub fn municipality_options(&self, key: Uuid) -> Vec<(String, String)> {
        self.cells.with(|c| {
            cell(c, key)
                .map(|cell| {
                    cell.options
                        .municipalities
                        .iter()
                        .map(|m| (m.municipality_id.to_string(), m.municipality_name.clone()))
                        .collect()
                })
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district(id: u32, name: &str) -> District {
        District {
            district_id: id,
            district_name: name.to_string(),
        }
    }

    fn municipality(id: u32, name: &str) -> Municipality {
        Municipality {
            municipality_id: id,
            municipality_name: name.to_string(),
        }
    }

    #[test]
    fn stale_district_response_is_discarded() {
        let key = Uuid::new_v4();
        let mut cells = Vec::new();
        ensure_cell(&mut cells, key);

        let first = begin_district_fetch(&mut cells, key).unwrap();
        let second = begin_district_fetch(&mut cells, key).unwrap();

        // The first fetch resolves after the second started.
        assert!(!apply_districts(
            &mut cells,
            key,
            first,
            vec![district(1, "Bhojpur")]
        ));
        assert!(cells[0].options.districts.is_empty());

        assert!(apply_districts(
            &mut cells,
            key,
            second,
            vec![district(2, "Ilam")]
        ));
        assert_eq!(cells[0].options.districts[0].district_name, "Ilam");
    }

    #[test]
    fn province_change_fences_pending_municipality_fetch() {
        let key = Uuid::new_v4();
        let mut cells = Vec::new();
        ensure_cell(&mut cells, key);

        begin_district_fetch(&mut cells, key);
        let muni_token = begin_municipality_fetch(&mut cells, key).unwrap();

        // User picks another province while municipalities are in flight.
        begin_district_fetch(&mut cells, key);

        assert!(!apply_municipalities(
            &mut cells,
            key,
            muni_token,
            vec![municipality(10, "Deumai")]
        ));
        assert!(cells[0].options.municipalities.is_empty());
    }

    #[test]
    fn response_for_removed_row_is_a_no_op() {
        let key = Uuid::new_v4();
        let mut cells = Vec::new();
        ensure_cell(&mut cells, key);

        let token = begin_district_fetch(&mut cells, key).unwrap();
        remove_cell(&mut cells, key);

        assert!(!apply_districts(
            &mut cells,
            key,
            token,
            vec![district(1, "Bhojpur")]
        ));
        assert!(cells.is_empty());
    }

    #[test]
    fn readded_row_starts_with_empty_options() {
        let gone = Uuid::new_v4();
        let stays = Uuid::new_v4();
        let mut cells = Vec::new();
        ensure_cell(&mut cells, gone);
        ensure_cell(&mut cells, stays);

        let token = begin_district_fetch(&mut cells, stays).unwrap();
        apply_districts(&mut cells, stays, token, vec![district(2, "Ilam")]);

        remove_cell(&mut cells, gone);
        let fresh = Uuid::new_v4();
        ensure_cell(&mut cells, fresh);

        // The surviving row keeps its cache, the new row gets none of it.
        assert_eq!(cell(&cells, stays).unwrap().options.districts.len(), 1);
        assert!(cell(&cells, fresh).unwrap().options.districts.is_empty());
    }

    #[test]
    fn copy_options_mirrors_and_fences_target() {
        let permanent = Uuid::new_v4();
        let temporary = Uuid::new_v4();
        let mut cells = Vec::new();
        ensure_cell(&mut cells, permanent);
        ensure_cell(&mut cells, temporary);

        let token = begin_district_fetch(&mut cells, permanent).unwrap();
        apply_districts(&mut cells, permanent, token, vec![district(2, "Ilam")]);

        // Temporary row had its own fetch in flight.
        let pending = begin_district_fetch(&mut cells, temporary).unwrap();

        assert!(copy_options(&mut cells, permanent, temporary));
        assert_eq!(
            cell(&cells, temporary).unwrap().options.districts[0].district_name,
            "Ilam"
        );
        assert!(!apply_districts(
            &mut cells,
            temporary,
            pending,
            vec![district(9, "Taplejung")]
        ));
    }

    #[test]
    fn ensure_cell_is_idempotent() {
        let key = Uuid::new_v4();
        let mut cells = Vec::new();
        ensure_cell(&mut cells, key);
        ensure_cell(&mut cells, key);
        assert_eq!(cells.len(), 1);
    }
}
