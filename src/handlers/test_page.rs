// src/handlers/test_page.rs
use chrono::{Local, NaiveDate};
use crate::dtos::test_page::TestIndexView;
use crate::dtos::view::View;

/// Long date form, e.g. "Monday, October 19, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub async fn index() -> View<TestIndexView> {
    View::new("Test/Index", TestIndexView {
        data1: "NewGen",
        data2: 25,
        data3: long_date(Local::now().date_naive()),
    })
}

pub async fn about() -> View<()> {
    View::empty("Test/About")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use crate::test_support::{app, body_json, get};
    use super::long_date;

    #[test]
    fn long_date_spells_out_weekday_and_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(long_date(date), "Monday, October 19, 2026");
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(long_date(date), "Thursday, February 1, 2024");
    }

    #[tokio::test]
    async fn index_fills_typed_view_data() {
        let body = body_json(get(&app(), "/Test/Index").await).await;
        assert_eq!(body["view"], "Test/Index");
        assert_eq!(body["model"]["data1"], "NewGen");
        assert_eq!(body["model"]["data2"], 25);

        let today = chrono::Local::now().date_naive();
        let yesterday = today.pred_opt().unwrap();
        let date = body["model"]["data3"].as_str().unwrap();
        assert!(date == long_date(today) || date == long_date(yesterday), "{date}");
    }

    #[tokio::test]
    async fn about_is_a_static_page() {
        let body = body_json(get(&app(), "/Test/About").await).await;
        assert_eq!(body, json!({ "view": "Test/About", "model": null }));
    }
}
