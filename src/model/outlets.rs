use serde::{Deserialize, Serialize};

/// A media source as listed by the backend's outlet directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub feeds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOutlets {
    pub country: String,
    #[serde(default)]
    pub outlets: Vec<Outlet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutletsResponse {
    #[serde(default)]
    pub countries: Vec<CountryOutlets>,
}

impl OutletsResponse {
    pub fn outlet_count(&self) -> usize {
        self.countries.iter().map(|c| c.outlets.len()).sum()
    }

    /// Every outlet paired with the country it is listed under, in response order.
    pub fn iter_outlets(&self) -> impl Iterator<Item = (&str, &Outlet)> {
        self.countries
            .iter()
            .flat_map(|c| c.outlets.iter().map(move |o| (c.country.as_str(), o)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_names_and_missing_feeds() {
        let body = r#"{
            "countries": [
                {"country": "Norway", "outlets": [
                    {"id": "nrk", "name": "NRK", "type": "public", "homepage": "https://nrk.no",
                     "feeds": ["https://nrk.no/rss"]},
                    {"id": "vg", "name": "VG", "type": "tabloid", "homepage": "https://vg.no"}
                ]},
                {"country": "Sweden", "outlets": []}
            ]
        }"#;
        let res: OutletsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(res.countries.len(), 2);
        assert_eq!(res.outlet_count(), 2);
        let vg = &res.countries[0].outlets[1];
        assert_eq!(vg.kind, "tabloid");
        assert!(vg.feeds.is_empty());

        let listed: Vec<_> = res.iter_outlets().map(|(c, o)| (c, o.id.as_str())).collect();
        assert_eq!(listed, vec![("Norway", "nrk"), ("Norway", "vg")]);
    }
}
