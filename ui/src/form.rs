//! Pure state model for the orphanage edit form.
//!
//! The page component owns an [`OrphanageForm`] in a `use_state` handle and
//! funnels every input event through the methods here. Keeping the model
//! free of DOM types means the gallery and submission invariants can be
//! tested without a browser.

use payloads::requests::{ImageUpload, SubmitOrphanage};
use payloads::responses::Orphanage;

/// A latitude/longitude pair picked on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// A locally selected image: bytes already read from the file, plus a
/// data-URL preview for the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingImage {
    pub file_name: String,
    pub data: Vec<u8>,
    pub preview_url: String,
}

/// One gallery entry. Existing images live on the backend and are only
/// shown; pending ones are uploaded on submit. Tagging them in a single
/// ordered list keeps deletion honest: removing an entry removes the
/// underlying file along with its preview.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryImage {
    Existing { url: String },
    Pending(PendingImage),
}

impl GalleryImage {
    pub fn preview_url(&self) -> &str {
        match self {
            Self::Existing { url } => url,
            Self::Pending(pending) => &pending.preview_url,
        }
    }
}

/// Editable copy of an orphanage record.
#[derive(Debug, Clone, PartialEq)]
pub struct OrphanageForm {
    pub name: String,
    pub about: String,
    pub whatsapp: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    /// `None` until the first map click. Submitted as the literal strings
    /// "0"/"0" when never set, matching what the backend has always
    /// received from this form.
    pub position: Option<GeoPosition>,
    pub gallery: Vec<GalleryImage>,
}

impl OrphanageForm {
    /// One-time setup from the record passed in through navigation.
    /// Existing images come first, in their stored order.
    pub fn from_record(record: &Orphanage) -> Self {
        Self {
            name: record.name.clone(),
            about: record.about.clone(),
            whatsapp: record.whatsapp.clone(),
            instructions: record.instructions.clone(),
            opening_hours: record.opening_hours.clone(),
            open_on_weekends: record.open_on_weekends,
            position: None,
            gallery: record
                .images
                .iter()
                .map(|image| GalleryImage::Existing {
                    url: image.url.clone(),
                })
                .collect(),
        }
    }

    /// Overwrites any previously picked position; last click wins.
    pub fn set_position(&mut self, latitude: f64, longitude: f64) {
        self.position = Some(GeoPosition {
            latitude,
            longitude,
        });
    }

    /// Appends newly selected images after everything already in the
    /// gallery, preserving selection order.
    pub fn add_images(&mut self, images: Vec<PendingImage>) {
        self.gallery
            .extend(images.into_iter().map(GalleryImage::Pending));
    }

    /// Removes exactly the entry at `index`; pending entries take their
    /// file with them. Out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.gallery.len() {
            self.gallery.remove(index);
        }
    }

    /// The images that will be uploaded on submit.
    pub fn pending_images(&self) -> impl Iterator<Item = &PendingImage> {
        self.gallery.iter().filter_map(|image| match image {
            GalleryImage::Pending(pending) => Some(pending),
            GalleryImage::Existing { .. } => None,
        })
    }

    /// Assembles the multipart payload from the current state.
    pub fn to_submission(&self) -> SubmitOrphanage {
        let (latitude, longitude) = match self.position {
            Some(position) => {
                (position.latitude.to_string(), position.longitude.to_string())
            }
            None => ("0".to_string(), "0".to_string()),
        };

        SubmitOrphanage {
            name: self.name.clone(),
            whatsapp: self.whatsapp.clone(),
            about: self.about.clone(),
            latitude,
            longitude,
            instructions: self.instructions.clone(),
            opening_hours: self.opening_hours.clone(),
            open_on_weekends: self.open_on_weekends,
            images: self
                .pending_images()
                .map(|pending| ImageUpload {
                    file_name: pending.file_name.clone(),
                    data: pending.data.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::OrphanageId;
    use payloads::responses::OrphanageImage;

    fn record() -> Orphanage {
        Orphanage {
            id: OrphanageId(7),
            name: "A".into(),
            about: "about".into(),
            instructions: "instructions".into(),
            opening_hours: "8am to 6pm".into(),
            open_on_weekends: false,
            whatsapp: "+5511999999999".into(),
            latitude: -27.2,
            longitude: -49.6,
            images: vec![
                OrphanageImage { url: "u1".into() },
                OrphanageImage { url: "u2".into() },
            ],
        }
    }

    fn pending(name: &str) -> PendingImage {
        PendingImage {
            file_name: name.into(),
            data: vec![1, 2, 3],
            preview_url: format!("data:image/jpeg;base64,{name}"),
        }
    }

    #[test]
    fn gallery_starts_with_record_images_in_order() {
        let form = OrphanageForm::from_record(&record());
        let urls: Vec<&str> =
            form.gallery.iter().map(|i| i.preview_url()).collect();
        assert_eq!(urls, ["u1", "u2"]);
        assert!(
            form.gallery
                .iter()
                .all(|i| matches!(i, GalleryImage::Existing { .. }))
        );
    }

    #[test]
    fn adding_files_appends_in_selection_order() {
        let mut form = OrphanageForm::from_record(&record());
        form.add_images(vec![pending("f1"), pending("f2")]);

        assert_eq!(form.gallery.len(), 4);
        let names: Vec<&str> =
            form.pending_images().map(|p| p.file_name.as_str()).collect();
        assert_eq!(names, ["f1", "f2"]);

        // A second selection appends again rather than replacing.
        form.add_images(vec![pending("f3")]);
        let names: Vec<&str> =
            form.pending_images().map(|p| p.file_name.as_str()).collect();
        assert_eq!(names, ["f1", "f2", "f3"]);
    }

    #[test]
    fn deleting_removes_exactly_one_entry_and_its_file() {
        let mut form = OrphanageForm::from_record(&record());
        form.add_images(vec![pending("f1"), pending("f2")]);

        // Deleting a pending entry drops its file from submission.
        form.remove_image(2); // f1
        assert_eq!(form.gallery.len(), 3);
        let names: Vec<&str> =
            form.pending_images().map(|p| p.file_name.as_str()).collect();
        assert_eq!(names, ["f2"]);

        // Deleting an existing entry keeps relative order of the rest.
        form.remove_image(0); // u1
        let urls: Vec<&str> =
            form.gallery.iter().map(|i| i.preview_url()).collect();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], "u2");

        // Out of range is a no-op.
        form.remove_image(99);
        assert_eq!(form.gallery.len(), 2);
    }

    #[test]
    fn map_clicks_overwrite_rather_than_accumulate() {
        let mut form = OrphanageForm::from_record(&record());
        assert_eq!(form.position, None);

        form.set_position(-27.1, -49.5);
        form.set_position(-27.3, -49.7);
        assert_eq!(
            form.position,
            Some(GeoPosition {
                latitude: -27.3,
                longitude: -49.7
            })
        );
    }

    #[test]
    fn untouched_position_submits_zero_strings() {
        let form = OrphanageForm::from_record(&record());
        let submission = form.to_submission();
        assert_eq!(submission.latitude, "0");
        assert_eq!(submission.longitude, "0");
    }

    #[test]
    fn picked_position_submits_stringified_coordinates() {
        let mut form = OrphanageForm::from_record(&record());
        form.set_position(-27.5, -49.25);
        let submission = form.to_submission();
        assert_eq!(submission.latitude, "-27.5");
        assert_eq!(submission.longitude, "-49.25");
    }

    #[test]
    fn submission_matches_displayed_gallery_end_to_end() {
        // Record with [u1, u2]; add f1; delete index 0 (u1); submit.
        let mut form = OrphanageForm::from_record(&record());
        form.add_images(vec![pending("f1")]);
        form.remove_image(0);

        let submission = form.to_submission();
        assert_eq!(submission.name, "A");
        assert_eq!(submission.latitude, "0");
        assert_eq!(submission.longitude, "0");

        let file_names: Vec<&str> = submission
            .images
            .iter()
            .map(|i| i.file_name.as_str())
            .collect();
        assert_eq!(file_names, ["f1"]);
    }
}
