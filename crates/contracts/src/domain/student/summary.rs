use serde::Deserialize;

/// One row of `GET /api/registration/students`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentSummary {
    pub student_id: i64,
    pub first_name: String,
    #[serde(deserialize_with = "super::record::null_string")]
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub primary_mobile: String,
    pub gender: String,
    pub citizenship_number: String,
}

impl StudentSummary {
    pub fn full_name(&self) -> String {
        let mut name = self.first_name.clone();
        if !self.middle_name.is_empty() {
            name.push(' ');
            name.push_str(&self.middle_name);
        }
        name.push(' ');
        name.push_str(&self.last_name);
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_skips_empty_middle_name() {
        let s = StudentSummary {
            first_name: "Sita".into(),
            last_name: "Sharma".into(),
            ..StudentSummary::default()
        };
        assert_eq!(s.full_name(), "Sita Sharma");
    }
}
