// Mirrors the recorded behavior of the real service for the SW11 area.
// Needs ZOOPLA_API_KEY (or a CONFIG_PATH toml) to run:
//   cargo test --test live_test -- --ignored

mod live_api_tests {
    use zoopla::{
        config, AutoCompleteOptions, AverageSoldPriceOptions, AreaValueGraphsOptions,
        ZedIndexOptions, Zoopla,
    };

    fn client() -> Zoopla {
        let config = config::read_config().expect("live tests need an API key configured");
        Zoopla::from_config(&config)
    }

    #[tokio::test]
    #[ignore = "hits the live Zoopla API"]
    async fn area_value_graphs_resolves_sw11() {
        let graphs = client()
            .area_value_graphs("SW11", AreaValueGraphsOptions::default())
            .await
            .unwrap();
        assert_eq!(graphs.area_name.trim(), "SW11");
    }

    #[tokio::test]
    #[ignore = "hits the live Zoopla API"]
    async fn zed_index_reports_country() {
        let index = client()
            .zed_index("SW11", ZedIndexOptions::default())
            .await
            .unwrap();
        assert_eq!(index.country.as_deref(), Some("England"));
    }

    #[tokio::test]
    #[ignore = "hits the live Zoopla API"]
    async fn average_area_sold_price_resolves_sw11() {
        let options = AverageSoldPriceOptions {
            area: Some("SW11".to_string()),
            ..Default::default()
        };
        let averages = client().get_average_area_sold_price(options).await.unwrap();
        assert_eq!(averages.area_name.trim(), "SW11");
    }

    #[tokio::test]
    #[ignore = "hits the live Zoopla API"]
    async fn auto_complete_suggests_westminster_postcode() {
        let completions = client()
            .auto_complete("SW", AutoCompleteOptions::default())
            .await
            .unwrap();
        assert_eq!(completions.suggestions[0].value, "SW1A 0PW");
    }
}
