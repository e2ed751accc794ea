//! Integration tests per gli endpoints delle ricette
//!
//! Test per:
//! - POST /api/recipes
//! - GET /api/recipes
//! - PUT /api/recipes/{id}
//! - DELETE /api/recipes/{id}

mod common;

#[cfg(test)]
mod recipe_tests {
    use super::common::{create_recipe, create_test_server, create_test_state};
    use axum::http::StatusCode;
    use recipebook_server::repositories::ReadAll;
    use serde_json::{Value, json};

    // ============================================================
    // Test per POST /api/recipes - create_recipe
    // ============================================================

    #[tokio::test]
    async fn test_create_recipe_success() {
        let server = create_test_server(create_test_state().await);

        let response = server
            .post("/api/recipes")
            .json(&json!({
                "name": "Cake",
                "ingredients": "flour, sugar, eggs",
                "instructions": "mix and bake"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Recipe added successfully!");
        assert!(body["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_create_recipe_missing_field() {
        let state = create_test_state().await;
        let server = create_test_server(state.clone());

        let response = server
            .post("/api/recipes")
            .json(&json!({
                "name": "Cake",
                "ingredients": "flour"
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "All fields are required.");
        assert!(state.recipe.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_recipe_empty_field() {
        let server = create_test_server(create_test_state().await);

        let response = server
            .post("/api/recipes")
            .json(&json!({
                "name": "",
                "ingredients": "flour",
                "instructions": "bake"
            }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_create_recipe_null_field() {
        let state = create_test_state().await;
        let server = create_test_server(state.clone());

        let response = server
            .post("/api/recipes")
            .json(&json!({
                "name": null,
                "ingredients": "flour",
                "instructions": "bake"
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "All fields are required.");
        assert!(state.recipe.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_recipe_malformed_body() {
        let server = create_test_server(create_test_state().await);

        let response = server
            .post("/api/recipes")
            .content_type("application/json")
            .text("{not json")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid request body");
    }

    // ============================================================
    // Test per GET /api/recipes - list_recipes
    // ============================================================

    #[tokio::test]
    async fn test_list_recipes_empty() {
        let server = create_test_server(create_test_state().await);

        let response = server.get("/api/recipes").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "recipes": [] }));
    }

    #[tokio::test]
    async fn test_list_recipes_returns_all_fields() {
        let server = create_test_server(create_test_state().await);
        let id = create_recipe(&server, "Cake", "flour", "bake").await;

        let response = server.get("/api/recipes").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "recipes": [
                { "id": id, "name": "Cake", "ingredients": "flour", "instructions": "bake" }
            ]
        }));
    }

    // ============================================================
    // Test per PUT /api/recipes/{id} - update_recipe
    // ============================================================

    #[tokio::test]
    async fn test_update_then_list_reflects_changes() {
        let server = create_test_server(create_test_state().await);
        let id = create_recipe(&server, "Cake", "flour", "bake").await;

        let response = server
            .put(&format!("/api/recipes/{}", id))
            .json(&json!({
                "name": "Lemon Cake",
                "ingredients": "flour, lemons",
                "instructions": "bake at 180C"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Recipe updated successfully!");

        let list: Value = server.get("/api/recipes").await.json();
        assert_eq!(list["recipes"][0]["id"], id);
        assert_eq!(list["recipes"][0]["name"], "Lemon Cake");
        assert_eq!(list["recipes"][0]["ingredients"], "flour, lemons");
        assert_eq!(list["recipes"][0]["instructions"], "bake at 180C");
    }

    #[tokio::test]
    async fn test_update_unknown_id_reports_success() {
        let server = create_test_server(create_test_state().await);

        let response = server
            .put("/api/recipes/4242")
            .json(&json!({
                "name": "Ghost",
                "ingredients": "none",
                "instructions": "none"
            }))
            .await;

        response.assert_status_ok();
        let list: Value = server.get("/api/recipes").await.json();
        assert_eq!(list["recipes"], json!([]));
    }

    #[tokio::test]
    async fn test_update_missing_field_leaves_recipe_untouched() {
        let server = create_test_server(create_test_state().await);
        let id = create_recipe(&server, "Cake", "flour", "bake").await;

        let response = server
            .put(&format!("/api/recipes/{}", id))
            .json(&json!({ "name": "Lemon Cake" }))
            .await;

        response.assert_status_bad_request();
        let list: Value = server.get("/api/recipes").await.json();
        assert_eq!(list["recipes"][0]["name"], "Cake");
    }

    // ============================================================
    // Test per DELETE /api/recipes/{id} - delete_recipe
    // ============================================================

    #[tokio::test]
    async fn test_delete_recipe_success() {
        let server = create_test_server(create_test_state().await);
        let id = create_recipe(&server, "Cake", "flour", "bake").await;
        let other = create_recipe(&server, "Pie", "apples", "bake").await;

        let response = server.delete(&format!("/api/recipes/{}", id)).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Recipe deleted successfully!");

        let list: Value = server.get("/api/recipes").await.json();
        let recipes = list["recipes"].as_array().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0]["id"], other);
    }

    #[tokio::test]
    async fn test_delete_unknown_recipe_reports_success() {
        let server = create_test_server(create_test_state().await);

        let response = server.delete("/api/recipes/999").await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_delete_with_invalid_id() {
        let server = create_test_server(create_test_state().await);

        let response = server.delete("/api/recipes/not-a-number").await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid id in URL");
        assert!(body["error"].as_str().unwrap().contains("not-a-number"));
    }

    #[tokio::test]
    async fn test_update_with_invalid_id() {
        let server = create_test_server(create_test_state().await);

        let response = server
            .put("/api/recipes/abc")
            .json(&json!({
                "name": "Cake",
                "ingredients": "flour",
                "instructions": "bake"
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid id in URL");
    }
}
