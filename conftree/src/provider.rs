//! Figment provider support for merged configuration trees.

use figment::{
    Error, Metadata, Profile, Provider,
    error::Kind,
    value::{Dict, Map, Value},
};

use crate::Root;

/// A merged tree can be layered into a [`figment::Figment`] like any other
/// provider. Its data is emitted into the default profile.
impl Provider for Root {
    fn metadata(&self) -> Metadata {
        Metadata::named("conftree root")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let value = Value::serialize(self)?;
        let actual = value.to_actual();
        let dict = value
            .into_dict()
            .ok_or_else(|| Error::from(Kind::InvalidType(actual, "map".into())))?;
        Ok(Profile::Default.collect(dict))
    }
}
