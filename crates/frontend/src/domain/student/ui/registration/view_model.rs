use super::model;
use crate::domain::location::LocationResolver;
use contracts::domain::lookup::LookupItem;
use contracts::domain::student::record::{
    AcademicRecord, Award, Parent, StudentRecord, UploadedFile,
};
use contracts::domain::student::validate::{
    coerce_id, validate_field, validate_record, ValidationErrors,
};
use contracts::domain::student::wizard::Wizard;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use uuid::Uuid;

type FileSlot = Option<SendWrapper<web_sys::File>>;

/// ViewModel for the registration wizard. Every field is a signal, the
/// struct itself is `Copy` and is handed to step components by value.
///
/// Array rows are addressed by a stable per-row `Uuid` in the `*_keys`
/// vectors, never by index, so async work started for a row stays pinned
/// to it across inserts and removals. `documents` runs parallel to
/// `record.files`, `certificates` parallel to `record.awards`.
#[derive(Clone, Copy)]
pub struct RegistrationVm {
    pub record: RwSignal<StudentRecord>,
    pub wizard: RwSignal<Wizard>,
    pub errors: RwSignal<ValidationErrors>,

    pub submitting: RwSignal<bool>,
    pub submit_error: RwSignal<Option<String>>,
    pub success: RwSignal<bool>,

    pub nationalities: RwSignal<Vec<LookupItem>>,
    pub blood_groups: RwSignal<Vec<LookupItem>>,
    pub marital_statuses: RwSignal<Vec<LookupItem>>,
    pub disability_statuses: RwSignal<Vec<LookupItem>>,

    pub resolver: LocationResolver,
    pub address_keys: RwSignal<Vec<Uuid>>,
    pub parent_keys: RwSignal<Vec<Uuid>>,
    pub academic_keys: RwSignal<Vec<Uuid>>,
    pub award_keys: RwSignal<Vec<Uuid>>,
    pub file_keys: RwSignal<Vec<Uuid>>,

    pub documents: RwSignal<Vec<FileSlot>>,
    pub certificates: RwSignal<Vec<FileSlot>>,
}

impl RegistrationVm {
    pub fn new() -> Self {
        let record = StudentRecord::new_registration();
        let resolver = LocationResolver::new();

        let address_keys: Vec<Uuid> = record.addresses.iter().map(|_| Uuid::new_v4()).collect();
        for key in &address_keys {
            resolver.add_cell(*key);
        }
        let parent_keys: Vec<Uuid> = record.parents.iter().map(|_| Uuid::new_v4()).collect();
        let academic_keys: Vec<Uuid> = record
            .previous_academics
            .iter()
            .map(|_| Uuid::new_v4())
            .collect();

        Self {
            record: RwSignal::new(record),
            wizard: RwSignal::new(Wizard::new()),
            errors: RwSignal::new(ValidationErrors::new()),
            submitting: RwSignal::new(false),
            submit_error: RwSignal::new(None),
            success: RwSignal::new(false),
            nationalities: RwSignal::new(Vec::new()),
            blood_groups: RwSignal::new(Vec::new()),
            marital_statuses: RwSignal::new(Vec::new()),
            disability_statuses: RwSignal::new(Vec::new()),
            resolver,
            address_keys: RwSignal::new(address_keys),
            parent_keys: RwSignal::new(parent_keys),
            academic_keys: RwSignal::new(academic_keys),
            award_keys: RwSignal::new(Vec::new()),
            file_keys: RwSignal::new(Vec::new()),
            documents: RwSignal::new(Vec::new()),
            certificates: RwSignal::new(Vec::new()),
        }
    }

    /// Kick off the static lookup and province fetches. A failed lookup
    /// degrades to an empty dropdown, it never blocks the wizard.
    pub fn load_reference_data(&self) {
        self.resolver.load_provinces();

        fn load(
            target: RwSignal<Vec<LookupItem>>,
            what: &'static str,
            fetch: impl std::future::Future<Output = Result<Vec<LookupItem>, String>> + 'static,
        ) {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch.await {
                    Ok(items) => target.set(items),
                    Err(e) => log::error!("loading {} failed: {}", what, e),
                }
            });
        }

        load(self.nationalities, "nationalities", model::fetch_nationalities());
        load(self.blood_groups, "blood groups", model::fetch_blood_groups());
        load(
            self.marital_statuses,
            "marital statuses",
            model::fetch_marital_statuses(),
        );
        load(
            self.disability_statuses,
            "disability statuses",
            model::fetch_disability_statuses(),
        );
    }

    // --- step navigation --------------------------------------------------

    pub fn next(&self) {
        let record = self.record.get_untracked();
        let mut wizard = self.wizard.get_untracked();
        match wizard.try_next(&record) {
            Ok(()) => {
                self.errors.set(ValidationErrors::new());
                self.wizard.set(wizard);
            }
            Err(errs) => self.errors.set(errs),
        }
    }

    pub fn prev(&self) {
        self.errors.set(ValidationErrors::new());
        self.wizard.update(|w| w.prev());
    }

    // --- field plumbing ---------------------------------------------------

    /// Reactive error lookup for one field path.
    pub fn field_error(&self, path: impl Into<String>) -> Signal<Option<String>> {
        let errors = self.errors;
        let path = path.into();
        Signal::derive(move || errors.with(|e| e.get(&path).map(str::to_string)))
    }

    /// Re-check one field after the user edited it, but only while a
    /// validation pass has already surfaced errors. Untouched forms stay
    /// quiet until the user tries to advance.
    pub fn touch(&self, path: &str) {
        if self.errors.with_untracked(|e| e.is_empty()) {
            return;
        }
        let record = self.record.get_untracked();
        let verdict = validate_field(&record, path);
        let path = path.to_string();
        self.errors.update(|errs| {
            errs.remove(&path);
            if let Err(message) = verdict {
                errs.insert(path, message);
            }
        });
    }

    // --- addresses --------------------------------------------------------

    pub fn address_index(&self, key: Uuid) -> Option<usize> {
        self.address_keys
            .with_untracked(|keys| keys.iter().position(|k| *k == key))
    }

    pub fn on_province_change(&self, key: Uuid, raw: String) {
        let Some(index) = self.address_index(key) else {
            return;
        };
        let province_id = coerce_id(&raw);
        self.record.update(|r| {
            if let Some(addr) = r.addresses.get_mut(index) {
                addr.province_id = province_id;
                addr.district_id = None;
                addr.municipality_id = None;
            }
        });
        match province_id {
            Some(id) => self.resolver.load_districts(key, id),
            None => self.resolver.invalidate(key),
        }
        self.touch(&format!("Addresses[{}].ProvinceId", index));
        self.after_permanent_address_change(index);
    }

    pub fn on_district_change(&self, key: Uuid, raw: String) {
        let Some(index) = self.address_index(key) else {
            return;
        };
        let district_id = coerce_id(&raw);
        self.record.update(|r| {
            if let Some(addr) = r.addresses.get_mut(index) {
                addr.district_id = district_id;
                addr.municipality_id = None;
            }
        });
        match district_id {
            Some(id) => self.resolver.load_municipalities(key, id),
            None => self.resolver.invalidate_municipalities(key),
        }
        self.touch(&format!("Addresses[{}].DistrictId", index));
        self.after_permanent_address_change(index);
    }

    pub fn on_municipality_change(&self, key: Uuid, raw: String) {
        let Some(index) = self.address_index(key) else {
            return;
        };
        self.record.update(|r| {
            if let Some(addr) = r.addresses.get_mut(index) {
                addr.municipality_id = coerce_id(&raw);
            }
        });
        self.touch(&format!("Addresses[{}].MunicipalityId", index));
        self.after_permanent_address_change(index);
    }

    pub fn set_address_text(
        &self,
        key: Uuid,
        field: &str,
        value: String,
        set: fn(&mut contracts::domain::student::record::Address, String),
    ) {
        let Some(index) = self.address_index(key) else {
            return;
        };
        self.record.update(|r| {
            if let Some(addr) = r.addresses.get_mut(index) {
                set(addr, value);
            }
        });
        self.touch(&format!("Addresses[{}].{}", index, field));
        self.after_permanent_address_change(index);
    }

    pub fn toggle_addresses_same(&self, checked: bool) {
        self.record.update(|r| r.addresses_same = checked);
        if checked {
            self.sync_temporary();
        }
    }

    fn after_permanent_address_change(&self, index: usize) {
        if index == 0 && self.record.with_untracked(|r| r.addresses_same) {
            self.sync_temporary();
        }
    }

    /// Copy the permanent address into the temporary slot, keeping the
    /// temporary row's own type discriminant and server id.
    fn sync_temporary(&self) {
        self.record.update(|r| {
            if r.addresses.len() < 2 {
                return;
            }
            let permanent = r.addresses[0].clone();
            let temporary = &mut r.addresses[1];
            temporary.province_id = permanent.province_id;
            temporary.district_id = permanent.district_id;
            temporary.municipality_id = permanent.municipality_id;
            temporary.ward_number = permanent.ward_number;
            temporary.street = permanent.street;
            temporary.house_number = permanent.house_number;
        });
        let keys = self.address_keys.get_untracked();
        if let (Some(from), Some(to)) = (keys.first(), keys.get(1)) {
            self.resolver.mirror(*from, *to);
        }
    }

    // --- repeatable rows --------------------------------------------------
    //
    // Shown errors are index-addressed and go stale when rows shift, so
    // every structural change clears them; the next validation pass
    // rebuilds them against the new shape.

    pub fn add_parent(&self) {
        self.record.update(|r| r.parents.push(Parent::default()));
        self.parent_keys.update(|k| k.push(Uuid::new_v4()));
        self.errors.set(ValidationErrors::new());
    }

    /// Any row may be removed, even the last one; an emptied collection is
    /// re-seeded with a blank row and the "at least one parent" invariant
    /// is left to whole-record validation at submit.
    pub fn remove_parent(&self, key: Uuid) {
        let Some(index) = self
            .parent_keys
            .with_untracked(|keys| keys.iter().position(|k| *k == key))
        else {
            return;
        };
        self.record.update(|r| {
            r.parents.remove(index);
            if r.parents.is_empty() {
                r.parents.push(Parent::default());
            }
        });
        self.parent_keys.update(|k| {
            k.remove(index);
            if k.is_empty() {
                k.push(Uuid::new_v4());
            }
        });
        self.errors.set(ValidationErrors::new());
    }

    pub fn add_academic(&self) {
        self.record
            .update(|r| r.previous_academics.push(AcademicRecord::default()));
        self.academic_keys.update(|k| k.push(Uuid::new_v4()));
        self.errors.set(ValidationErrors::new());
    }

    pub fn remove_academic(&self, key: Uuid) {
        let Some(index) = self
            .academic_keys
            .with_untracked(|keys| keys.iter().position(|k| *k == key))
        else {
            return;
        };
        self.record.update(|r| {
            r.previous_academics.remove(index);
            if r.previous_academics.is_empty() {
                r.previous_academics.push(AcademicRecord::default());
            }
        });
        self.academic_keys.update(|k| {
            k.remove(index);
            if k.is_empty() {
                k.push(Uuid::new_v4());
            }
        });
        self.errors.set(ValidationErrors::new());
    }

    pub fn add_award(&self) {
        self.record.update(|r| r.awards.push(Award::default()));
        self.award_keys.update(|k| k.push(Uuid::new_v4()));
        self.certificates.update(|c| c.push(None));
        self.errors.set(ValidationErrors::new());
    }

    pub fn remove_award(&self, key: Uuid) {
        let Some(index) = self
            .award_keys
            .with_untracked(|keys| keys.iter().position(|k| *k == key))
        else {
            return;
        };
        self.record.update(|r| {
            r.awards.remove(index);
        });
        self.award_keys.update(|k| {
            k.remove(index);
        });
        self.certificates.update(|c| {
            c.remove(index);
        });
        self.errors.set(ValidationErrors::new());
    }

    pub fn add_file(&self) {
        self.record.update(|r| r.files.push(UploadedFile::default()));
        self.file_keys.update(|k| k.push(Uuid::new_v4()));
        self.documents.update(|d| d.push(None));
        self.errors.set(ValidationErrors::new());
    }

    pub fn remove_file(&self, key: Uuid) {
        let Some(index) = self
            .file_keys
            .with_untracked(|keys| keys.iter().position(|k| *k == key))
        else {
            return;
        };
        self.record.update(|r| {
            r.files.remove(index);
        });
        self.file_keys.update(|k| {
            k.remove(index);
        });
        self.documents.update(|d| {
            d.remove(index);
        });
        self.errors.set(ValidationErrors::new());
    }

    pub fn set_document(&self, key: Uuid, file: Option<web_sys::File>) {
        let Some(index) = self
            .file_keys
            .with_untracked(|keys| keys.iter().position(|k| *k == key))
        else {
            return;
        };
        self.documents.update(|d| {
            if let Some(slot) = d.get_mut(index) {
                *slot = file.map(SendWrapper::new);
            }
        });
    }

    pub fn set_certificate(&self, key: Uuid, file: Option<web_sys::File>) {
        let Some(index) = self
            .award_keys
            .with_untracked(|keys| keys.iter().position(|k| *k == key))
        else {
            return;
        };
        self.certificates.update(|c| {
            if let Some(slot) = c.get_mut(index) {
                *slot = file.map(SendWrapper::new);
            }
        });
    }

    // --- submission -------------------------------------------------------

    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let record = self.record.get_untracked();
        if let Err(errs) = validate_record(&record) {
            self.errors.set(errs);
            return;
        }
        self.submitting.set(true);
        self.submit_error.set(None);

        let documents = self.documents.get_untracked();
        let certificates = self.certificates.get_untracked();
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match model::build_form_data(&record, &documents, &certificates) {
                Ok(form) => model::register(&form).await,
                Err(e) => Err(e),
            };
            vm.complete_submission(result);
        });
    }

    /// A created record is gone from the wizard's hands, so success resets
    /// to a pristine record immediately; failure keeps the entered data on
    /// the last step for a retry.
    fn complete_submission(&self, result: Result<(), String>) {
        self.submitting.set(false);
        match result {
            Ok(()) => {
                self.reset();
                self.success.set(true);
            }
            Err(e) => self.submit_error.set(Some(e)),
        }
    }

    /// Load an existing record (edit flow). Row keys are regenerated to
    /// match the incoming collections, then the location cascade is
    /// replayed per address so the dependent selects can display the
    /// saved district and municipality.
    pub async fn hydrate(&self, record: StudentRecord) {
        for key in self.address_keys.get_untracked() {
            self.resolver.remove_cell(key);
        }
        let address_keys: Vec<Uuid> = record.addresses.iter().map(|_| Uuid::new_v4()).collect();
        for key in &address_keys {
            self.resolver.add_cell(*key);
        }

        self.parent_keys
            .set(record.parents.iter().map(|_| Uuid::new_v4()).collect());
        self.academic_keys.set(
            record
                .previous_academics
                .iter()
                .map(|_| Uuid::new_v4())
                .collect(),
        );
        self.award_keys
            .set(record.awards.iter().map(|_| Uuid::new_v4()).collect());
        self.file_keys
            .set(record.files.iter().map(|_| Uuid::new_v4()).collect());
        self.documents
            .set(record.files.iter().map(|_| None).collect());
        self.certificates
            .set(record.awards.iter().map(|_| None).collect());
        self.address_keys.set(address_keys.clone());

        let cascades: Vec<(Uuid, Option<u32>, Option<u32>)> = record
            .addresses
            .iter()
            .zip(&address_keys)
            .map(|(a, key)| (*key, a.province_id, a.district_id))
            .collect();

        self.record.set(record);
        self.errors.set(ValidationErrors::new());

        for (key, province_id, district_id) in cascades {
            self.resolver.hydrate_cell(key, province_id, district_id).await;
        }
    }

    /// Back to a pristine wizard, with fresh row keys and option caches.
    pub fn reset(&self) {
        let record = StudentRecord::new_registration();

        for key in self.address_keys.get_untracked() {
            self.resolver.remove_cell(key);
        }
        let address_keys: Vec<Uuid> = record.addresses.iter().map(|_| Uuid::new_v4()).collect();
        for key in &address_keys {
            self.resolver.add_cell(*key);
        }
        self.address_keys.set(address_keys);
        self.parent_keys
            .set(record.parents.iter().map(|_| Uuid::new_v4()).collect());
        self.academic_keys.set(
            record
                .previous_academics
                .iter()
                .map(|_| Uuid::new_v4())
                .collect(),
        );
        self.award_keys.set(Vec::new());
        self.file_keys.set(Vec::new());
        self.documents.set(Vec::new());
        self.certificates.set(Vec::new());

        self.record.set(record);
        self.wizard.update(|w| w.reset());
        self.errors.set(ValidationErrors::new());
        self.submit_error.set(None);
        self.success.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_the_last_parent_reseeds_a_blank_row() {
        let vm = RegistrationVm::new();
        let key = vm.parent_keys.get_untracked()[0];
        vm.record
            .update(|r| r.parents[0].full_name = "Sita Rai".to_string());

        vm.remove_parent(key);

        let record = vm.record.get_untracked();
        assert_eq!(record.parents.len(), 1);
        assert!(record.parents[0].is_blank());
        assert_ne!(vm.parent_keys.get_untracked()[0], key);
    }

    #[test]
    fn removing_the_last_academic_reseeds_a_blank_row() {
        let vm = RegistrationVm::new();
        let key = vm.academic_keys.get_untracked()[0];
        vm.record
            .update(|r| r.previous_academics[0].qualification = "SEE".to_string());

        vm.remove_academic(key);

        let record = vm.record.get_untracked();
        assert_eq!(record.previous_academics.len(), 1);
        assert!(record.previous_academics[0].is_blank());
        assert_ne!(vm.academic_keys.get_untracked()[0], key);
    }

    #[test]
    fn successful_submission_resets_to_a_fresh_record() {
        let vm = RegistrationVm::new();
        vm.record
            .update(|r| r.first_name = "Anish".to_string());
        vm.submitting.set(true);

        vm.complete_submission(Ok(()));

        assert!(vm.success.get_untracked());
        assert!(!vm.submitting.get_untracked());
        let record = vm.record.get_untracked();
        assert!(record.first_name.is_empty());
        assert!(vm.wizard.get_untracked().is_first());
    }

    #[test]
    fn failed_submission_keeps_the_entered_record() {
        let vm = RegistrationVm::new();
        vm.record
            .update(|r| r.first_name = "Anish".to_string());
        vm.submitting.set(true);

        vm.complete_submission(Err("backend rejected".to_string()));

        assert!(!vm.success.get_untracked());
        assert!(!vm.submitting.get_untracked());
        assert_eq!(
            vm.record.get_untracked().first_name,
            "Anish"
        );
        assert_eq!(
            vm.submit_error.get_untracked().as_deref(),
            Some("backend rejected")
        );
    }
}
