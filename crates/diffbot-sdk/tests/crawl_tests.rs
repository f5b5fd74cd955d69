//! Request construction tests for crawl job management (test mode)

use diffbot_sdk::{encode_component, CrawlDataOptions, CrawlOptions, Diffbot, Method, RequestDescriptor};
use pretty_assertions::assert_eq;

const TOKEN: &str = "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx";
const NAME: &str = "testcrawl";
const SEEDS: [&str; 2] = ["https://example.com", "https://google.com"];
const DEFAULT_API_URL: &str = "https://api.diffbot.com/v3/analyze?mode=auto";

fn diffbot() -> Diffbot {
    Diffbot::new(TOKEN, true).unwrap()
}

fn crawl_url() -> String {
    format!("https://api.diffbot.com/v3/crawl?token={TOKEN}")
}

async fn prepared(call: diffbot_sdk::Call) -> RequestDescriptor {
    call.await.unwrap().into_request().expect("test mode returns the request")
}

fn assert_post_without_body(request: &RequestDescriptor) {
    assert_eq!(request.method(), Method::Post);
    assert!(request.body().is_none());
    assert!(request.headers().is_empty());
}

mod create {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_create_with_every_option() {
        let options = CrawlOptions {
            api_url: Some(DEFAULT_API_URL.to_string()),
            url_crawl_pattern: Some("!product||sandwich".to_string()),
            url_crawl_reg_ex: Some("product".to_string()),
            url_process_pattern: Some("!/category".to_string()),
            url_process_reg_ex: Some("/products".to_string()),
            page_process_pattern: Some("sandwich".to_string()),
            use_canonical: Some(false),
            obey_robots: Some(false),
            restrict_domain: Some(false),
            use_proxies: Some(true),
            max_hops: Some(0),
            max_to_crawl: Some(1000),
            max_to_process: Some(100),
            max_to_crawl_per_subdomain: Some(500),
            max_to_process_per_subdomain: Some(50),
            notify_email: Some("foo@bar.com".to_string()),
            notify_webhook: Some("https://foo.com/webhook".to_string()),
            crawl_delay: Some(0.25),
            repeat: Some(7.0),
            seed_recrawl_frequency: Some(2.0),
            only_process_if_new: Some(false),
            max_rounds: Some(10),
            ..CrawlOptions::new(NAME, SEEDS)
        };

        let request = prepared(diffbot().crawl().create(&options).unwrap()).await;

        let expected = format!(
            "{}&name={}&seeds={}&apiUrl={}&urlCrawlPattern={}&urlCrawlRegEx=product\
             &urlProcessPattern={}&urlProcessRegEx={}&pageProcessPattern=sandwich\
             &useCanonical=0&obeyRobots=0&restrictDomain=0&useProxies=1&maxHops=0\
             &maxToCrawl=1000&maxToProcess=100&maxToCrawlPerSubdomain=500\
             &maxToProcessPerSubdomain=50&notifyEmail={}&notifyWebhook={}&crawlDelay=0.25\
             &repeat=7&seedRecrawlFrequency=2&onlyProcessIfNew=0&maxRounds=10",
            crawl_url(),
            NAME,
            encode_component(&SEEDS.join(" ")),
            encode_component(DEFAULT_API_URL),
            encode_component("!product||sandwich"),
            encode_component("!/category"),
            encode_component("/products"),
            encode_component("foo@bar.com"),
            encode_component("https://foo.com/webhook"),
        );
        assert_eq!(request.url(), expected);
        assert_post_without_body(&request);
    }

    #[tokio::test]
    async fn test_create_with_default_api_url() {
        let request = prepared(
            diffbot()
                .crawl()
                .create(&CrawlOptions::new(NAME, SEEDS))
                .unwrap(),
        )
        .await;

        assert_eq!(
            request.url(),
            format!(
                "{}&name=testcrawl&seeds=https%3A%2F%2Fexample.com%20https%3A%2F%2Fgoogle.com\
                 &apiUrl=https%3A%2F%2Fapi.diffbot.com%2Fv3%2Fanalyze%3Fmode%3Dauto",
                crawl_url()
            )
        );
        assert_post_without_body(&request);
    }

    #[test]
    fn test_create_without_name() {
        let options = CrawlOptions::new("", SEEDS);
        let err = diffbot().crawl().create(&options).unwrap_err();
        assert_eq!(err.to_string(), "missing name");
    }

    #[test]
    fn test_create_without_seeds() {
        let options = CrawlOptions::new(NAME, Vec::<String>::new());
        let err = diffbot().crawl().create(&options).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "missing seeds");
    }

    #[tokio::test]
    async fn test_create_skips_blank_seeds() {
        let options = CrawlOptions::new(NAME, ["https://a.com", "", "  ", " https://b.com "]);
        let request = prepared(diffbot().crawl().create(&options).unwrap()).await;

        assert!(request
            .url()
            .contains("&seeds=https%3A%2F%2Fa.com%20https%3A%2F%2Fb.com&apiUrl="));
    }

    #[test]
    fn test_create_with_only_blank_seeds() {
        let err = diffbot()
            .crawl()
            .create(&CrawlOptions::new(NAME, ["", " "]))
            .unwrap_err();
        assert_eq!(err.to_string(), "missing seeds");
    }

    #[test]
    fn test_name_is_checked_before_seeds() {
        let err = diffbot().crawl().create(&CrawlOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "missing name");
    }
}

mod get {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_get_with_every_option() {
        let options = CrawlDataOptions {
            format: Some("csv".to_string()),
            report_type: Some("urls".to_string()),
            num: Some(100),
            ..CrawlDataOptions::new(NAME)
        };
        let request = prepared(diffbot().crawl().get(&options).unwrap()).await;

        assert_eq!(
            request.url(),
            format!(
                "https://api.diffbot.com/v3/crawl/data?token={TOKEN}&name=testcrawl&format=csv&type=urls&num=100"
            )
        );
        assert_eq!(request.method(), Method::Get);
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_get_without_name() {
        let err = diffbot().crawl().get(&CrawlDataOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "missing name");
    }

    #[test]
    fn test_get_with_invalid_format() {
        let options = CrawlDataOptions {
            format: Some("txt".to_string()),
            ..CrawlDataOptions::new("job1")
        };
        let err = diffbot().crawl().get(&options).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "invalid format");
    }

    #[test]
    fn test_get_with_invalid_type() {
        let options = CrawlDataOptions {
            format: Some("csv".to_string()),
            report_type: Some("pages".to_string()),
            ..CrawlDataOptions::new(NAME)
        };
        let err = diffbot().crawl().get(&options).unwrap_err();
        assert_eq!(err.to_string(), "invalid type");
    }
}

mod lifecycle {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_pause() {
        let request = prepared(diffbot().crawl().pause(NAME).unwrap()).await;
        assert_eq!(request.url(), format!("{}&name=testcrawl&pause=1", crawl_url()));
        assert_post_without_body(&request);
    }

    #[tokio::test]
    async fn test_resume() {
        let request = prepared(diffbot().crawl().resume(NAME).unwrap()).await;
        assert_eq!(request.url(), format!("{}&name=testcrawl&pause=0", crawl_url()));
        assert_post_without_body(&request);
    }

    #[tokio::test]
    async fn test_restart() {
        let request = prepared(diffbot().crawl().restart(NAME).unwrap()).await;
        assert_eq!(request.url(), format!("{}&name=testcrawl&restart=1", crawl_url()));
        assert_post_without_body(&request);
    }

    #[tokio::test]
    async fn test_delete() {
        let request = prepared(diffbot().crawl().delete(NAME).unwrap()).await;
        assert_eq!(request.url(), format!("{}&name=testcrawl&delete=1", crawl_url()));
        assert_post_without_body(&request);
    }

    #[test]
    fn test_transitions_require_name() {
        let diffbot = diffbot();
        let crawl = diffbot.crawl();
        for err in [
            crawl.pause("").unwrap_err(),
            crawl.resume("").unwrap_err(),
            crawl.restart("").unwrap_err(),
            crawl.delete("").unwrap_err(),
        ] {
            assert_eq!(err.to_string(), "missing name");
        }
    }

    #[tokio::test]
    async fn test_details_for_one_job() {
        let request = prepared(diffbot().crawl().details(Some(NAME)).unwrap()).await;
        assert_eq!(request.url(), format!("{}&name=testcrawl", crawl_url()));
        assert_eq!(request.method(), Method::Get);
        assert!(request.body().is_none());
        assert!(request.headers().is_empty());
    }

    #[tokio::test]
    async fn test_details_for_all_jobs() {
        let request = prepared(diffbot().crawl().details(None).unwrap()).await;
        assert_eq!(request.url(), crawl_url());
        assert_eq!(request.method(), Method::Get);
    }

    #[tokio::test]
    async fn test_job_names_are_encoded() {
        let request = prepared(diffbot().crawl().pause("my crawl/1").unwrap()).await;
        assert_eq!(request.url(), format!("{}&name=my%20crawl%2F1&pause=1", crawl_url()));
    }
}
