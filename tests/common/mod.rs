#![allow(dead_code)]

use serde_json::{json, Value};

pub fn outlets_body() -> Value {
    json!({
        "countries": [
            {
                "country": "Norway",
                "outlets": [
                    {"id": "nrk", "name": "NRK", "type": "public", "homepage": "https://www.nrk.no",
                     "feeds": ["https://www.nrk.no/toppsaker.rss", "https://www.nrk.no/norge/toppsaker.rss"]},
                    {"id": "vg", "name": "VG", "type": "tabloid", "homepage": "https://www.vg.no",
                     "feeds": ["https://www.vg.no/rss/feed"]}
                ]
            },
            {
                "country": "Sweden",
                "outlets": [
                    {"id": "svt", "name": "SVT Nyheter", "type": "public", "homepage": "https://www.svt.se",
                     "feeds": ["https://www.svt.se/nyheter/rss.xml"]}
                ]
            }
        ]
    })
}

pub fn metrics_body() -> Value {
    json!({
        "days": ["2024-05-01", "2024-05-02", "2024-05-03"],
        "series": [
            {"country": "Norway", "outletId": "nrk", "outletName": "NRK", "counts": [1, 2, 4]},
            {"country": "Norway", "outletId": "vg", "counts": [0, 0, 0]},
            {"country": "Sweden", "outletId": "svt", "outletName": "SVT", "counts": [5, 3, 8]},
            {"country": "Denmark", "outletId": "dr", "outletName": "DR", "counts": [2, 2, 2]}
        ]
    })
}

pub fn status_body() -> Value {
    json!({
        "countryCount": 2,
        "outletCount": 3,
        "latestIngestDate": "20240503",
        "articlesLatestRun": 17,
        "outletsLatestRun": [
            {"outletId": "nrk", "count": 4},
            {"outletId": "svt", "count": 8}
        ],
        "dataDir": "/srv/newsdash/data",
        "error": null
    })
}
