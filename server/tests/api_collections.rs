//! Integration tests per gli endpoints delle collezioni
//!
//! Test per:
//! - POST /api/collections
//! - GET /api/collections
//! - DELETE /api/collections/{id}
//! - POST /api/collections/add-recipe

mod common;

#[cfg(test)]
mod collection_tests {
    use super::common::{create_collection, create_recipe, create_test_server, create_test_state};
    use axum::http::StatusCode;
    use recipebook_server::entities::Membership;
    use recipebook_server::repositories::ReadAll;
    use serde_json::{Value, json};

    // ============================================================
    // Test per POST /api/collections - create_collection
    // ============================================================

    #[tokio::test]
    async fn test_create_collection_success() {
        let server = create_test_server(create_test_state().await);

        let response = server
            .post("/api/collections")
            .json(&json!({ "name": "Desserts" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Collection created successfully!");
        assert!(body["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_create_collection_without_name() {
        let server = create_test_server(create_test_state().await);

        let response = server.post("/api/collections").json(&json!({})).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Name is required.");

        let list: Value = server.get("/api/collections").await.json();
        assert_eq!(list["collections"], json!([]));
    }

    // ============================================================
    // Test per GET /api/collections - list_collections
    // ============================================================

    #[tokio::test]
    async fn test_empty_collection_is_listed_with_no_recipes() {
        let server = create_test_server(create_test_state().await);
        let id = create_collection(&server, "Empty").await;

        let response = server.get("/api/collections").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "collections": [
                { "id": id, "name": "Empty", "recipes": [] }
            ]
        }));
    }

    #[tokio::test]
    async fn test_add_recipe_then_list_nests_it() {
        let server = create_test_server(create_test_state().await);
        let collection_id = create_collection(&server, "Desserts").await;
        let recipe_id = create_recipe(&server, "Cake", "flour, sugar", "bake 40 minutes").await;

        let response = server
            .post("/api/collections/add-recipe")
            .json(&json!({ "collectionName": "Desserts", "recipeName": "Cake" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Recipe added to collection successfully!");

        let list = server.get("/api/collections").await;
        list.assert_json(&json!({
            "collections": [
                {
                    "id": collection_id,
                    "name": "Desserts",
                    "recipes": [
                        {
                            "id": recipe_id,
                            "name": "Cake",
                            "ingredients": "flour, sugar",
                            "instructions": "bake 40 minutes"
                        }
                    ]
                }
            ]
        }));
    }

    #[tokio::test]
    async fn test_list_groups_recipes_per_collection() {
        let server = create_test_server(create_test_state().await);
        create_collection(&server, "Desserts").await;
        create_collection(&server, "Quick").await;
        create_recipe(&server, "Cake", "flour", "bake").await;
        create_recipe(&server, "Toast", "bread", "toast").await;

        for (collection, recipe) in [("Desserts", "Cake"), ("Quick", "Toast"), ("Quick", "Cake")] {
            server
                .post("/api/collections/add-recipe")
                .json(&json!({ "collectionName": collection, "recipeName": recipe }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let list: Value = server.get("/api/collections").await.json();
        let collections = list["collections"].as_array().unwrap();
        assert_eq!(collections.len(), 2);
        assert_eq!(collections[0]["name"], "Desserts");
        assert_eq!(collections[0]["recipes"].as_array().unwrap().len(), 1);
        assert_eq!(collections[1]["name"], "Quick");
        assert_eq!(collections[1]["recipes"].as_array().unwrap().len(), 2);
    }

    // ============================================================
    // Test per POST /api/collections/add-recipe - add_recipe_to_collection
    // ============================================================

    #[tokio::test]
    async fn test_add_recipe_missing_names() {
        let server = create_test_server(create_test_state().await);

        let response = server
            .post("/api/collections/add-recipe")
            .json(&json!({ "collectionName": "Desserts" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Collection name and recipe name are required.");
    }

    #[tokio::test]
    async fn test_add_recipe_unknown_collection() {
        let state = create_test_state().await;
        let server = create_test_server(state.clone());
        create_recipe(&server, "Cake", "flour", "bake").await;

        let response = server
            .post("/api/collections/add-recipe")
            .json(&json!({ "collectionName": "Nope", "recipeName": "Cake" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "Error finding collection.");
        assert!(state.membership.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_recipe_unknown_recipe() {
        let state = create_test_state().await;
        let server = create_test_server(state.clone());
        create_collection(&server, "Desserts").await;

        let response = server
            .post("/api/collections/add-recipe")
            .json(&json!({ "collectionName": "Desserts", "recipeName": "Nope" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "Error finding recipe.");
        assert!(state.membership.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_recipe_with_ambiguous_name() {
        let state = create_test_state().await;
        let server = create_test_server(state.clone());
        create_collection(&server, "Desserts").await;
        create_recipe(&server, "Cake", "flour", "bake").await;
        create_recipe(&server, "Cake", "almond flour", "bake longer").await;

        let response = server
            .post("/api/collections/add-recipe")
            .json(&json!({ "collectionName": "Desserts", "recipeName": "Cake" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "More than one row matches this name");
        assert!(state.membership.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_same_recipe_twice_fails() {
        let state = create_test_state().await;
        let server = create_test_server(state.clone());
        create_collection(&server, "Desserts").await;
        create_recipe(&server, "Cake", "flour", "bake").await;
        let body = json!({ "collectionName": "Desserts", "recipeName": "Cake" });

        server
            .post("/api/collections/add-recipe")
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);
        let response = server.post("/api/collections/add-recipe").json(&body).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "Error adding recipe to collection in the database");
        assert_eq!(state.membership.read_all().await.unwrap().len(), 1);
    }

    // ============================================================
    // Test per DELETE /api/collections/{id} - delete_collection
    // ============================================================

    #[tokio::test]
    async fn test_delete_collection_removes_its_memberships() {
        let state = create_test_state().await;
        let server = create_test_server(state.clone());
        let desserts = create_collection(&server, "Desserts").await;
        let quick = create_collection(&server, "Quick").await;
        let cake = create_recipe(&server, "Cake", "flour", "bake").await;
        for collection in ["Desserts", "Quick"] {
            server
                .post("/api/collections/add-recipe")
                .json(&json!({ "collectionName": collection, "recipeName": "Cake" }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.delete(&format!("/api/collections/{}", desserts)).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Collection deleted successfully!");
        assert_eq!(
            state.membership.read_all().await.unwrap(),
            vec![Membership {
                recipe_id: cake,
                collection_id: quick
            }]
        );
    }

    #[tokio::test]
    async fn test_delete_recipe_drops_it_from_collections() {
        let server = create_test_server(create_test_state().await);
        create_collection(&server, "Desserts").await;
        let cake = create_recipe(&server, "Cake", "flour", "bake").await;
        server
            .post("/api/collections/add-recipe")
            .json(&json!({ "collectionName": "Desserts", "recipeName": "Cake" }))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .delete(&format!("/api/recipes/{}", cake))
            .await
            .assert_status_ok();

        let list: Value = server.get("/api/collections").await.json();
        assert_eq!(list["collections"][0]["name"], "Desserts");
        assert_eq!(list["collections"][0]["recipes"], json!([]));
    }

    #[tokio::test]
    async fn test_delete_unknown_collection_reports_success() {
        let server = create_test_server(create_test_state().await);

        let response = server.delete("/api/collections/31337").await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_delete_collection_with_invalid_id() {
        let server = create_test_server(create_test_state().await);

        let response = server.delete("/api/collections/desserts").await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid id in URL");
    }
}
