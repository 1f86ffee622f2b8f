//! Bundles: named, ordered collections of links.
//!
//! A bundle is addressed by its `bundle_link` (e.g.,
//! `http://bitly.com/bundles/o_1ab2c3/4`). Most methods return the updated
//! bundle.

use serde_json::Value;

use crate::client::BitlyClient;
use crate::endpoints;
use crate::error::{BitlyError, Result};
use crate::models::{BundleEdit, NewBundle};
use crate::query::Params;

impl BitlyClient {
    /// Archive a bundle. Returns whether the service acknowledged it.
    ///
    /// This endpoint answers with a bare `OK` rather than an envelope.
    pub async fn bundle_archive(&self, bundle_link: &str) -> Result<bool> {
        let body = self
            .invoke_raw(
                &endpoints::BUNDLE_ARCHIVE,
                Params::new().with("bundle_link", bundle_link),
            )
            .await?;
        Ok(body == "OK")
    }

    /// Bundles owned by `user`.
    pub async fn bundle_bundles_by_user(
        &self,
        user: &str,
        expand_user: Option<bool>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("user", user)
            .with_opt("expand_user", expand_user);
        self.invoke(&endpoints::BUNDLE_BUNDLES_BY_USER, params).await
    }

    /// Copy a bundle into the user's account.
    pub async fn bundle_clone(&self, bundle_link: &str) -> Result<Value> {
        self.invoke(
            &endpoints::BUNDLE_CLONE,
            Params::new().with("bundle_link", bundle_link),
        )
        .await
    }

    /// Invite a collaborator by login or email.
    pub async fn bundle_collaborator_add(
        &self,
        bundle_link: &str,
        collaborator: &str,
    ) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("collaborator", collaborator);
        self.invoke(&endpoints::BUNDLE_COLLABORATOR_ADD, params).await
    }

    pub async fn bundle_collaborator_remove(
        &self,
        bundle_link: &str,
        collaborator: &str,
    ) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("collaborator", collaborator);
        self.invoke(&endpoints::BUNDLE_COLLABORATOR_REMOVE, params)
            .await
    }

    /// Withdraw an invitation that has not been accepted yet.
    pub async fn bundle_pending_collaborator_remove(
        &self,
        bundle_link: &str,
        collaborator: &str,
    ) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("collaborator", collaborator);
        self.invoke(&endpoints::BUNDLE_PENDING_COLLABORATOR_REMOVE, params)
            .await
    }

    /// A bundle with its links and comments.
    pub async fn bundle_contents(
        &self,
        bundle_link: &str,
        expand_user: Option<bool>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with_opt("expand_user", expand_user);
        self.invoke(&endpoints::BUNDLE_CONTENTS, params).await
    }

    pub async fn bundle_create(&self, bundle: &NewBundle) -> Result<Value> {
        let mut params = Params::new();
        bundle.apply(&mut params);
        self.invoke(&endpoints::BUNDLE_CREATE, params).await
    }

    /// Change bundle metadata.
    ///
    /// # Errors
    ///
    /// Returns [`BitlyError::Usage`] if `edit` changes nothing.
    pub async fn bundle_edit(&self, bundle_link: &str, edit: &BundleEdit) -> Result<Value> {
        if edit.is_empty() {
            return Err(BitlyError::Usage(
                "bundle_edit requires at least one field to change".to_string(),
            ));
        }
        let mut params = Params::new().with("bundle_link", bundle_link);
        edit.apply(&mut params);
        self.invoke(&endpoints::BUNDLE_EDIT, params).await
    }

    /// Add a link (long URL or bitlink) to a bundle.
    pub async fn bundle_link_add(
        &self,
        bundle_link: &str,
        link: &str,
        title: Option<&str>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("link", link)
            .with_opt("title", title);
        self.invoke(&endpoints::BUNDLE_LINK_ADD, params).await
    }

    pub async fn bundle_link_comment_add(
        &self,
        bundle_link: &str,
        link: &str,
        comment: &str,
    ) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("link", link)
            .with("comment", comment);
        self.invoke(&endpoints::BUNDLE_LINK_COMMENT_ADD, params).await
    }

    pub async fn bundle_link_comment_edit(
        &self,
        bundle_link: &str,
        link: &str,
        comment_id: i64,
        comment: &str,
    ) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("link", link)
            .with("comment_id", comment_id)
            .with("comment", comment);
        self.invoke(&endpoints::BUNDLE_LINK_COMMENT_EDIT, params)
            .await
    }

    pub async fn bundle_link_comment_remove(
        &self,
        bundle_link: &str,
        link: &str,
        comment_id: i64,
    ) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("link", link)
            .with("comment_id", comment_id);
        self.invoke(&endpoints::BUNDLE_LINK_COMMENT_REMOVE, params)
            .await
    }

    /// Change the title or preview flag of a link inside a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`BitlyError::Usage`] if neither field is given.
    pub async fn bundle_link_edit(
        &self,
        bundle_link: &str,
        link: &str,
        title: Option<&str>,
        preview: Option<bool>,
    ) -> Result<Value> {
        let edit = match (title.is_some(), preview.is_some()) {
            (true, true) => "title,preview",
            (true, false) => "title",
            (false, true) => "preview",
            (false, false) => {
                return Err(BitlyError::Usage(
                    "bundle_link_edit requires a title or preview".to_string(),
                ))
            }
        };
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("link", link)
            .with("edit", edit)
            .with_opt("title", title)
            .with_opt("preview", preview);
        self.invoke(&endpoints::BUNDLE_LINK_EDIT, params).await
    }

    pub async fn bundle_link_remove(&self, bundle_link: &str, link: &str) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("link", link);
        self.invoke(&endpoints::BUNDLE_LINK_REMOVE, params).await
    }

    /// Move a link to position `display_order` (0-based).
    pub async fn bundle_link_reorder(
        &self,
        bundle_link: &str,
        link: &str,
        display_order: i64,
    ) -> Result<Value> {
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("link", link)
            .with("display_order", display_order);
        self.invoke(&endpoints::BUNDLE_LINK_REORDER, params).await
    }

    pub async fn bundle_view_count(&self, bundle_link: &str) -> Result<Value> {
        self.invoke(
            &endpoints::BUNDLE_VIEW_COUNT,
            Params::new().with("bundle_link", bundle_link),
        )
        .await
    }
}
