#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::models::{Link, LinkBase, PasswordChange, SectionBase, Setting, ShelfBase, UserBase};
    use crate::password::PasswordHasher;
    use crate::repository::memory::MemoryStore;
    use crate::repository::Repositories;
    use crate::services::Services;

    fn setup_services() -> (Services, MemoryStore) {
        let store = MemoryStore::new();
        let services = Services::new(
            Repositories::in_memory(store.clone()),
            PasswordHasher::with_cost(4 /* bcrypt minimum cost */),
        );
        (services, store)
    }

    fn signup(email: &str, password: &str) -> UserBase {
        UserBase {
            email: email.into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            password: password.into(),
        }
    }

    fn shelf_base(user_id: &str) -> ShelfBase {
        ShelfBase {
            title: "Reading".into(),
            path: "reading".into(),
            domain: "example.com".into(),
            description: String::new(),
            theme: "dark".into(),
            icon: String::new(),
            user_id: user_id.into(),
        }
    }

    fn change(old: &str, new: &str) -> PasswordChange {
        PasswordChange { old_password: old.into(), new_password: new.into() }
    }

    #[tokio::test]
    async fn test_signup_stores_hash() {
        let (services, _) = setup_services();

        let user = services.users.create(signup("ada@example.com", "secret")).await.unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_ne!(user.password, "secret");
        assert!(bcrypt::verify("secret", &user.password).unwrap());

        let stored = services.users.get(&user.id).await.unwrap().unwrap();
        assert_eq!(stored, user);
    }

    #[tokio::test]
    async fn test_update_returns_reloaded_row() {
        let (services, _) = setup_services();
        let user = services.users.create(signup("ada@example.com", "secret")).await.unwrap();

        let updated = services.users.update(&user.id, signup("grace@example.com", "ignored")).await.unwrap();
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.email, "grace@example.com");
        // Profile updates never touch the hash
        assert_eq!(updated.password, user.password);
    }

    #[tokio::test]
    async fn test_update_of_missing_row_is_not_found() {
        let (services, _) = setup_services();
        let err = services.shelves.update("missing", shelf_base("u1")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_patch_password() {
        let (services, _) = setup_services();
        let user = services.users.create(signup("ada@example.com", "secret")).await.unwrap();

        services.users.patch_password(&user.id, &change("secret", "n3w")).await.unwrap();

        let stored = services.users.get(&user.id).await.unwrap().unwrap();
        assert!(bcrypt::verify("n3w", &stored.password).unwrap());
        assert!(!bcrypt::verify("secret", &stored.password).unwrap());
    }

    #[tokio::test]
    async fn test_failed_patch_password_leaves_hash_unchanged() {
        let (services, store) = setup_services();
        let user = services.users.create(signup("ada@example.com", "secret")).await.unwrap();

        for old in ["wrong", ""] {
            let err = services.users.patch_password(&user.id, &change(old, "n3w")).await.unwrap_err();
            assert!(matches!(err, AppError::CredentialMismatch), "{:?}", err);
        }

        store.fail("user.patch_password");
        let err = services.users.patch_password(&user.id, &change("secret", "n3w")).await.unwrap_err();
        assert!(matches!(err, AppError::Database { .. }));
        store.heal("user.patch_password");

        let stored = services.users.get(&user.id).await.unwrap().unwrap();
        assert_eq!(stored.password, user.password);
    }

    #[tokio::test]
    async fn test_patch_password_of_unknown_user_is_mismatch() {
        let (services, _) = setup_services();
        let err = services.users.patch_password("missing", &change("secret", "n3w")).await.unwrap_err();
        assert!(matches!(err, AppError::CredentialMismatch));
    }

    #[tokio::test]
    async fn test_reload_failure_after_create_keeps_row() {
        let (services, store) = setup_services();

        store.fail("shelf.get");
        let err = services.shelves.create(shelf_base("u1")).await.unwrap_err();
        assert!(matches!(err, AppError::Database { context: "shelf.get", .. }));
        store.heal("shelf.get");

        let shelves = services.shelves.list().await.unwrap();
        assert_eq!(shelves.len(), 1);
        assert_eq!(shelves[0].title, "Reading");
    }

    #[tokio::test]
    async fn test_failed_write_skips_reload() {
        let (services, store) = setup_services();
        store.fail("section.create");
        let err = services.sections.create(SectionBase { title: "News".into(), shelf_id: "s1".into() }).await;
        assert!(matches!(err, Err(AppError::Database { context: "section.create", .. })));
        assert!(services.sections.list_by_shelf("s1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shelf_update_keeps_owner() {
        let (services, _) = setup_services();
        let shelf = services.shelves.create(shelf_base("u1")).await.unwrap();

        let mut changed = shelf_base("u2");
        changed.title = "Watching".into();
        let updated = services.shelves.update(&shelf.id, changed).await.unwrap();
        assert_eq!(updated.title, "Watching");
        assert_eq!(updated.user_id, "u1");
        assert_eq!(services.shelves.list_by_user("u1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_shelf_get_then_delete() {
        let (services, _) = setup_services();
        let shelf = services.shelves.create(shelf_base("u1")).await.unwrap();

        let found = services.shelves.get(&shelf.id).await.unwrap().unwrap();
        services.shelves.delete(&found).await.unwrap();
        assert!(services.shelves.get(&shelf.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_link_color_is_trimmed_on_every_read() {
        let (services, store) = setup_services();
        let section = services.sections.create(SectionBase { title: "News".into(), shelf_id: "s1".into() }).await.unwrap();
        store
            .put_link(Link {
                id: "l1".into(),
                title: "padded".into(),
                link: "https://example.com".into(),
                icon: String::new(),
                color: "#ff0000     ".into(),
                section_id: section.id.clone(),
            })
            .await;

        assert_eq!(services.links.get("l1").await.unwrap().unwrap().color, "#ff0000");
        assert_eq!(services.links.list_by_section(&section.id).await.unwrap()[0].color, "#ff0000");
        assert_eq!(services.links.list_by_shelf("s1").await.unwrap()[0].color, "#ff0000");

        let created = services
            .links
            .create(LinkBase {
                title: "new".into(),
                link: "https://example.org".into(),
                icon: String::new(),
                color: "  #00ff00 ".into(),
                section_id: section.id.clone(),
            })
            .await
            .unwrap();
        assert_eq!(created.color, "#00ff00");
    }

    #[tokio::test]
    async fn test_link_update_stays_in_section() {
        let (services, _) = setup_services();
        let link = services
            .links
            .create(LinkBase { title: "a".into(), section_id: "sec1".into(), ..Default::default() })
            .await
            .unwrap();

        let updated = services
            .links
            .update(&link.id, LinkBase { title: "b".into(), section_id: "sec2".into(), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.title, "b");
        assert_eq!(updated.section_id, "sec1");
    }

    #[tokio::test]
    async fn test_setting_update_is_scoped_by_language() {
        let (services, store) = setup_services();
        store.put_setting(Setting::new("about", "en", "About")).await;
        store.put_setting(Setting::new("about", "de", "Über")).await;

        services.settings.update(&Setting::new("about", "de", "Über uns")).await.unwrap();

        assert_eq!(services.settings.get("about", "de").await.unwrap().unwrap().value, "Über uns");
        assert_eq!(services.settings.get("about", "en").await.unwrap().unwrap().value, "About");
        assert_eq!(services.settings.list().await.unwrap().len(), 2);
    }
}
