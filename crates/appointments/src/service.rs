use serde::{Deserialize, Serialize};

use greenscape_core::{DomainResult, Entity, text};

greenscape_core::uuid_newtype!(
    /// Catalogue service identifier.
    pub struct ServiceId,
    "ServiceId"
);

/// Catalogue entry as submitted from the admin screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Entity: a landscaping service customers can book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    id: ServiceId,
    name: String,
    description: String,
    #[serde(default)]
    more_info: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

impl Service {
    pub fn create(id: ServiceId, details: ServiceDetails) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: text::required("name", &details.name)?,
            description: text::required("description", &details.description)?,
            more_info: text::optional(details.more_info),
            image_url: text::optional(details.image_url),
        })
    }

    /// Replace the text fields. The image is only swapped when a new one is
    /// given.
    pub fn replace_details(&mut self, details: ServiceDetails) -> DomainResult<()> {
        let mut next = Self::create(self.id, details)?;
        if next.image_url.is_none() {
            next.image_url = self.image_url.take();
        }
        *self = next;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn more_info(&self) -> Option<&str> {
        self.more_info.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

impl Entity for Service {
    type Id = ServiceId;

    const COLLECTION: &'static str = "services";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenscape_core::DomainError;

    fn details(image: Option<&str>) -> ServiceDetails {
        ServiceDetails {
            name: "Lawn Care".to_string(),
            description: "Weekly mowing and edging".to_string(),
            more_info: None,
            image_url: image.map(str::to_string),
        }
    }

    #[test]
    fn create_requires_name_and_description() {
        let mut input = details(None);
        input.description = "  ".to_string();
        let err = Service::create(ServiceId::new(), input).unwrap_err();
        assert_eq!(err, DomainError::validation("description is required"));
    }

    #[test]
    fn replacing_details_keeps_the_image_unless_given() {
        let mut service = Service::create(ServiceId::new(), details(Some("/img/lawn.png"))).unwrap();

        let mut update = details(None);
        update.name = "Lawn Care Plus".to_string();
        service.replace_details(update).unwrap();
        assert_eq!(service.name(), "Lawn Care Plus");
        assert_eq!(service.image_url(), Some("/img/lawn.png"));

        service.replace_details(details(Some("/img/new.png"))).unwrap();
        assert_eq!(service.image_url(), Some("/img/new.png"));
    }

    #[test]
    fn rejected_replacement_leaves_the_service_alone() {
        let mut service = Service::create(ServiceId::new(), details(Some("/img/lawn.png"))).unwrap();
        let before = service.clone();

        let mut update = details(Some("/img/other.png"));
        update.name = String::new();
        assert!(service.replace_details(update).is_err());
        assert_eq!(service, before);
    }
}
