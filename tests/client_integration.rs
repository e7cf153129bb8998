//! Integration tests for buckets, objects and object groups.

use aistore::api::types::ByteRange;
use aistore::api::{AisError, StatusError};
use aistore::client::{AisSource, Client, GetOptions};
use aistore::shared::Provider;
use futures_util::{StreamExt, TryStreamExt};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(uuid: &str, token: &str, names: &[&str]) -> serde_json::Value {
    let entries: Vec<_> = names
        .iter()
        .map(|name| serde_json::json!({"name": name, "size": 1}))
        .collect();
    serde_json::json!({
        "uuid": uuid,
        "continuation_token": token,
        "flags": 0,
        "entries": entries
    })
}

mod bucket {
    use super::*;

    #[tokio::test]
    async fn test_list_objects_single_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/buckets/bck"))
            .and(query_param("provider", "gcp"))
            .and(body_partial_json(serde_json::json!({
                "action": "list",
                "value": {"prefix": "train/", "pagesize": 2}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(page("u1", "", &["train/a", "train/b"])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = Client::new(mock_server.uri()).unwrap();
        let bucket = client.bucket("bck", Provider::Gcp);
        let list = bucket
            .list_objects(
                aistore::api::types::ListObjectsMsg::new()
                    .with_prefix("train/")
                    .with_page_size(2),
            )
            .await
            .unwrap();
        assert!(list.is_last_page());
        assert_eq!(list.entries.len(), 2);
    }

    #[tokio::test]
    async fn test_list_objects_iter_follows_continuation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/buckets/bck"))
            .and(body_partial_json(serde_json::json!({"value": {"continuation_token": ""}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(page("lst-1", "obj-2", &["obj-1", "obj-2"])))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/buckets/bck"))
            .and(body_partial_json(serde_json::json!({
                "value": {"uuid": "lst-1", "continuation_token": "obj-2"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(page("lst-1", "", &["obj-3"])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = Client::new(mock_server.uri()).unwrap();
        let entries = client
            .bucket("bck", Provider::Ais)
            .list_all_objects("")
            .await
            .unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["obj-1", "obj-2", "obj-3"]);
    }

    #[tokio::test]
    async fn test_list_missing_bucket() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/buckets/nope"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "status": 404,
                "message": "bucket \"ais://nope\" does not exist"
            })))
            .mount(&mock_server)
            .await;

        let client = Client::new(mock_server.uri()).unwrap();
        let result: Result<Vec<_>, _> = client
            .bucket("nope", Provider::Ais)
            .list_objects_iter("", "", 0)
            .try_collect()
            .await;
        assert!(matches!(
            result,
            Err(AisError::Status(StatusError::BucketNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_bucket_list_urls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/buckets/bck"))
            .and(body_partial_json(serde_json::json!({"value": {"prefix": "img/", "props": "name"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(page("", "", &["img/1.jpg"])))
            .mount(&mock_server)
            .await;

        let client = Client::new(mock_server.uri()).unwrap();
        let bucket = client.bucket("bck", Provider::Ais);
        let urls: Vec<String> = bucket
            .list_urls("img/", Some("resize"))
            .try_collect()
            .await
            .unwrap();
        assert_eq!(
            urls,
            vec![format!(
                "{}/v1/objects/bck/img/1.jpg?provider=ais&etl_name=resize",
                mock_server.uri()
            )]
        );
    }
}

mod object {
    use super::*;

    #[tokio::test]
    async fn test_get_object() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/objects/bck/dir/obj.bin"))
            .and(query_param("provider", "ais"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("ais-checksum-type", "xxhash")
                    .insert_header("ais-checksum-value", "f00d")
                    .insert_header("ais-version", "2")
                    .set_body_bytes(b"object-content".to_vec()),
            )
            .mount(&mock_server)
            .await;

        let client = Client::new(mock_server.uri()).unwrap();
        let reader = client
            .bucket("bck", Provider::Ais)
            .object("dir/obj.bin")
            .get(GetOptions::new())
            .await
            .unwrap();

        let attrs = reader.attributes().clone();
        assert_eq!(attrs.checksum_type, "xxhash");
        assert_eq!(attrs.checksum_value, "f00d");
        assert_eq!(attrs.obj_version, "2");
        assert_eq!(attrs.size, 14);
        assert_eq!(&reader.read_all().await.unwrap()[..], b"object-content");
    }

    #[tokio::test]
    async fn test_get_object_with_etl_and_range() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/objects/bck/obj"))
            .and(query_param("provider", "aws"))
            .and(query_param("etl_name", "md5"))
            .and(header("range", "bytes=0-3"))
            .respond_with(ResponseTemplate::new(206).set_body_bytes(b"abcd".to_vec()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = Client::new(mock_server.uri()).unwrap();
        let options = GetOptions::new()
            .with_etl_name("md5")
            .with_byte_range(ByteRange { start: 0, end: Some(3) });
        let reader = client
            .bucket("bck", Provider::Aws)
            .object("obj")
            .get(options)
            .await
            .unwrap();

        let chunks: Vec<_> = reader.raw().try_collect().await.unwrap();
        let body: Vec<u8> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
        assert_eq!(body, b"abcd");
    }

    #[tokio::test]
    async fn test_get_missing_object() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/objects/bck/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("object not found"))
            .mount(&mock_server)
            .await;

        let client = Client::new(mock_server.uri()).unwrap();
        let err = client
            .bucket("bck", Provider::Ais)
            .object("missing")
            .get(GetOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AisError::Status(StatusError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_head_object() {
        let mock_server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(path("/v1/objects/bck/obj"))
            .and(query_param("provider", "ais"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("ais-version", "7")
                    .insert_header("ais-atime", "1700000000000000000"),
            )
            .mount(&mock_server)
            .await;

        let client = Client::new(mock_server.uri()).unwrap();
        let attrs = client
            .bucket("bck", Provider::Ais)
            .object("obj")
            .head()
            .await
            .unwrap();
        assert_eq!(attrs.obj_version, "7");
        assert_eq!(attrs.access_time, "1700000000000000000");
    }

    #[test]
    fn test_get_url() {
        let client = Client::new("http://localhost:8080").unwrap();
        let object = client.bucket("bck", Provider::Gcp).object("a/b.txt");
        assert_eq!(
            object.get_url(None).unwrap(),
            "http://localhost:8080/v1/objects/bck/a/b.txt?provider=gcp"
        );
        assert_eq!(
            object.get_url(Some("to-upper")).unwrap(),
            "http://localhost:8080/v1/objects/bck/a/b.txt?provider=gcp&etl_name=to-upper"
        );
    }

    #[tokio::test]
    async fn test_object_name_is_escaped_on_the_wire() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/objects/bck/logs/a%3Fb%23c%25d"))
            .and(query_param("provider", "ais"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = Client::new(mock_server.uri()).unwrap();
        let object = client.bucket("bck", Provider::Ais).object("logs/a?b#c%d");
        assert_eq!(
            object.get_url(None).unwrap(),
            format!("{}/v1/objects/bck/logs/a%3Fb%23c%25d?provider=ais", mock_server.uri())
        );

        let reader = object.get(GetOptions::new()).await.unwrap();
        assert_eq!(&reader.read_all().await.unwrap()[..], b"ok");
    }

    #[tokio::test]
    async fn test_object_list_urls_respects_prefix() {
        let client = Client::new("http://localhost:8080").unwrap();
        let object = client.bucket("bck", Provider::Ais).object("train/x");

        let urls: Vec<String> = object.list_urls("train/", None).try_collect().await.unwrap();
        assert_eq!(urls, vec!["http://localhost:8080/v1/objects/bck/train/x?provider=ais"]);

        let urls: Vec<String> = object.list_urls("val/", None).try_collect().await.unwrap();
        assert!(urls.is_empty());
    }
}

mod object_group {
    use super::*;

    #[tokio::test]
    async fn test_group_list_urls() {
        let client = Client::new("http://localhost:8080").unwrap();
        let group = client
            .bucket("bck", Provider::Ais)
            .objects(["a/1", "b/2", "a/3"]);
        assert_eq!(group.len(), 3);
        assert_eq!(group.objects().count(), 3);

        let urls: Vec<String> = group.list_urls("a/", Some("etl")).try_collect().await.unwrap();
        assert_eq!(
            urls,
            vec![
                "http://localhost:8080/v1/objects/bck/a/1?provider=ais&etl_name=etl",
                "http://localhost:8080/v1/objects/bck/a/3?provider=ais&etl_name=etl",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_group() {
        let client = Client::new("http://localhost:8080").unwrap();
        let group = client.bucket("bck", Provider::Ais).objects(Vec::<String>::new());
        assert!(group.is_empty());
        assert_eq!(group.list_urls("", None).count().await, 0);
    }
}
