use reqwest::multipart;
use serde::{Deserialize, Serialize};

/// A locally selected image file, bytes already read on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Payload for submitting an orphanage as a multipart form.
///
/// The backend expects every scalar as a string field plus a repeated
/// `images` file part, so this type builds a `reqwest::multipart::Form`
/// rather than serializing to JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOrphanage {
    pub name: String,
    pub whatsapp: String,
    pub about: String,
    pub latitude: String,
    pub longitude: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    pub images: Vec<ImageUpload>,
}

impl SubmitOrphanage {
    /// The scalar fields in the order and with the keys the backend
    /// expects.
    pub fn text_fields(&self) -> [(&'static str, String); 8] {
        [
            ("name", self.name.clone()),
            ("whatsapp", self.whatsapp.clone()),
            ("about", self.about.clone()),
            ("latitude", self.latitude.clone()),
            ("longitude", self.longitude.clone()),
            ("instructions", self.instructions.clone()),
            ("opening_hours", self.opening_hours.clone()),
            ("open_on_weekends", self.open_on_weekends.to_string()),
        ]
    }

    pub fn into_multipart(self) -> multipart::Form {
        let mut form = multipart::Form::new();
        for (key, value) in self.text_fields() {
            form = form.text(key, value);
        }
        for image in self.images {
            let part =
                multipart::Part::bytes(image.data).file_name(image.file_name);
            form = form.part("images", part);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SubmitOrphanage {
        SubmitOrphanage {
            name: "Happy Home".into(),
            whatsapp: "+5511999999999".into(),
            about: "About text".into(),
            latitude: "0".into(),
            longitude: "0".into(),
            instructions: "Ring the bell".into(),
            opening_hours: "8am to 6pm".into(),
            open_on_weekends: true,
            images: vec![ImageUpload {
                file_name: "front.jpg".into(),
                data: vec![0xff, 0xd8],
            }],
        }
    }

    #[test]
    fn text_fields_use_backend_keys_in_order() {
        let fields = payload().text_fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            [
                "name",
                "whatsapp",
                "about",
                "latitude",
                "longitude",
                "instructions",
                "opening_hours",
                "open_on_weekends"
            ]
        );
    }

    #[test]
    fn booleans_and_coordinates_are_stringified() {
        let fields = payload().text_fields();
        assert_eq!(fields[3], ("latitude", "0".to_string()));
        assert_eq!(fields[4], ("longitude", "0".to_string()));
        assert_eq!(fields[7], ("open_on_weekends", "true".to_string()));
    }

    #[test]
    fn multipart_builds_without_panicking() {
        // Form contents are opaque, but building must accept file parts.
        let _form = payload().into_multipart();
    }
}
