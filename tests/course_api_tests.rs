use actix_web::http::{StatusCode, header};
use actix_web::{App, test};
use mock_course_api::catalog::catalog;
use mock_course_api::models::Course;
use mock_course_api::server::{ServerConfig, configure_app};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::time::{Duration, Instant};

const TEST_DELAY: Duration = Duration::from_millis(50);

struct Respuesta {
    status: StatusCode,
    content_type: String,
    text: String,
    json: Value,
    elapsed: Duration,
}

async fn enviar(req: test::TestRequest, delay: Duration) -> Respuesta {
    let config = ServerConfig::default().with_delay(delay);
    let app = test::init_service(App::new().configure(move |cfg| configure_app(cfg, config))).await;

    let started = Instant::now();
    let resp = test::call_service(&app, req.to_request()).await;
    let elapsed = started.elapsed();

    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = test::read_body(resp).await;
    let text = String::from_utf8(bytes.to_vec()).expect("cuerpo UTF-8");
    let json = serde_json::from_str(&text).expect("cuerpo JSON");

    Respuesta { status, content_type, text, json, elapsed }
}

async fn get(uri: &str) -> Respuesta {
    enviar(test::TestRequest::get().uri(uri), TEST_DELAY).await
}

#[actix_web::test]
async fn test_raiz_lista_codigos() {
    let r = get("/").await;
    assert_eq!(r.status, StatusCode::OK);

    let codes: HashSet<String> = r.json["available_codes"]
        .as_array()
        .expect("available_codes debe ser un array")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    let esperados: HashSet<String> = catalog().codes().into_iter().map(str::to_string).collect();
    assert_eq!(codes, esperados);
    assert_eq!(r.json, json!({"available_codes": ["CP353004", "CP353002", "CP353006"]}));
}

#[actix_web::test]
async fn test_todos_los_cursos_coinciden_con_el_catalogo() {
    for course in catalog().courses() {
        let r = get(&format!("/{}", course.code)).await;
        assert_eq!(r.status, StatusCode::OK, "curso {}", course.code);
        assert_eq!(r.json, serde_json::to_value(course).unwrap());

        let parsed: Course = serde_json::from_value(r.json).unwrap();
        assert_eq!(&parsed, course);
    }
}

#[actix_web::test]
async fn test_software_engineering() {
    let r = get("/CP353004").await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.json["name_en"], "Software Engineering");
    assert_eq!(r.json["sections"][0]["number"], "02");
    assert_eq!(r.json["sections"][0]["schedules"][1]["type"], "Lab");
    assert_eq!(r.json["sections"][0]["schedules"][0]["day"], "Monday");
}

#[actix_web::test]
async fn test_codigo_desconocido_404() {
    let r = get("/NOPE").await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.json, json!({"error": "course 'NOPE' not found"}));
}

#[actix_web::test]
async fn test_busqueda_sensible_a_mayusculas() {
    let r = get("/cp353004").await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.json["error"], "course 'cp353004' not found");
}

#[actix_web::test]
async fn test_barras_extremas_se_ignoran() {
    let r = get("/CP353006/").await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.json["name_en"], "Database Systems");
}

#[actix_web::test]
async fn test_query_string_forma_parte_de_la_clave() {
    let r = get("/CP353004?semester=1").await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.json["error"], "course 'CP353004?semester=1' not found");

    let r = get("/CP353004/sections").await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert_eq!(r.json["error"], "course 'CP353004/sections' not found");
}

#[actix_web::test]
async fn test_content_type_en_todas_las_respuestas() {
    for uri in ["/", "/CP353002", "/NOPE"] {
        let r = get(uri).await;
        assert_eq!(r.content_type, "application/json; charset=utf-8", "uri {}", uri);
    }
}

#[actix_web::test]
async fn test_latencia_simulada() {
    for uri in ["/", "/CP353004", "/NOPE"] {
        let r = get(uri).await;
        assert!(r.elapsed >= TEST_DELAY, "{} respondió en {:?}", uri, r.elapsed);
    }
}

#[actix_web::test]
async fn test_json_indentado_sin_escapar_unicode() {
    let r = get("/CP353002").await;
    assert!(r.text.starts_with("{\n  \"code\": \"CP353002\",\n  \"name_en\""));
    assert!(r.text.contains("\"name_th\": \"การเขียนโปรแกรมเชิงวัตถุ\""));
    assert!(r.text.contains("\"prerequisite\": \"\""));
    assert!(!r.text.contains("\\u"));

    let r = get("/NOPE").await;
    assert_eq!(r.text, "{\n  \"error\": \"course 'NOPE' not found\"\n}");
}

#[actix_web::test]
async fn test_metodo_no_soportado_sin_espera() {
    let delay = Duration::from_secs(10);
    let r = enviar(test::TestRequest::post().uri("/CP353004"), delay).await;
    assert_eq!(r.status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(r.json, json!({"error": "unsupported method 'POST'"}));
    assert_eq!(r.content_type, "application/json; charset=utf-8");
    assert!(r.elapsed < delay);
}
