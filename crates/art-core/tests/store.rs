// File: crates/art-core/tests/store.rs
// Purpose: Artwork records: form validation, CRUD, recency ordering and server-side generation.

use art_core::{
    ArtError, ArtworkForm, ArtworkPatch, ArtworkStore, Compositor, MissionVariant, TemplateType, UploadPolicy,
};

fn form(name: &str, color: &str, mission: &str) -> ArtworkForm {
    ArtworkForm {
        company_name: name.into(),
        primary_color: color.into(),
        mission_type: mission.into(),
        ..Default::default()
    }
}

#[test]
fn validates_form_fields() {
    let ok = form("Nike", "#22c55e", "follow-instagram").validate().expect("valid");
    assert_eq!(ok.primary_color.to_hex(), "#22C55E");
    assert_eq!(ok.mission_type, MissionVariant::FollowInstagram);
    assert_eq!(ok.template_type, TemplateType::Instagram);

    let field = |f: ArtworkForm| match f.validate() {
        Err(ArtError::Validation { field, .. }) => field,
        other => panic!("expected validation error, got {other:?}"),
    };
    assert_eq!(field(form("", "#22C55E", "follow-instagram")), "companyName");
    assert_eq!(field(form("Nike", "#22C55", "follow-instagram")), "primaryColor");
    assert_eq!(field(form("Nike", "22C55E", "follow-instagram")), "primaryColor");
    assert_eq!(field(form("Nike", "#22C55E", "follow-tiktok")), "missionType");

    let mut bad_template = form("Nike", "#22C55E", "choose-proplayer");
    bad_template.template_type = Some("poster".into());
    assert_eq!(field(bad_template), "templateType");
}

#[test]
fn form_deserializes_from_camel_case_json() {
    let f: ArtworkForm = serde_json::from_str(
        r##"{"companyName":"Nike","primaryColor":"#3B82F6","missionType":"choose-proplayer","templateType":"proplayer"}"##,
    )
    .unwrap();
    let new = f.validate().unwrap();
    assert_eq!(new.mission_type, MissionVariant::ChooseProPlayer);
    assert_eq!(new.template_type, TemplateType::ProPlayer);
    assert_eq!(new.logo_path, None);
}

#[test]
fn create_get_update() {
    let store = ArtworkStore::new();
    let a = store.create(form("Nike", "#22C55E", "follow-instagram").validate().unwrap());
    assert_eq!(store.get(a.id), Some(a.clone()));
    assert_eq!(a.generated_image_path, None);

    let patched = store
        .update(a.id, ArtworkPatch { generated_image_path: Some("/uploads/x.png".into()), ..Default::default() })
        .expect("exists");
    assert_eq!(patched.generated_image_path.as_deref(), Some("/uploads/x.png"));
    assert_eq!(patched.company_name, "Nike");

    assert_eq!(store.update(uuid::Uuid::new_v4(), ArtworkPatch::default()), None);
}

#[test]
fn recent_is_newest_first_and_limited() {
    let store = ArtworkStore::new();
    let ids: Vec<_> = (0..5)
        .map(|i| store.create(form(&format!("Co{i}"), "#22C55E", "follow-instagram").validate().unwrap()).id)
        .collect();

    let recent = store.recent(3);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent.iter().map(|a| a.id).collect::<Vec<_>>(), vec![ids[4], ids[3], ids[2]]);
    assert_eq!(store.recent(100).len(), 5);
    assert_eq!(store.len(), 5);
}

#[test]
fn artwork_serializes_wire_names() {
    let store = ArtworkStore::new();
    let a = store.create(form("Nike", "#22C55E", "choose-proplayer").validate().unwrap());
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["companyName"], "Nike");
    assert_eq!(json["primaryColor"], "#22C55E");
    assert_eq!(json["missionType"], "choose-proplayer");
    assert_eq!(json["templateType"], "instagram");
    assert!(json["generatedImagePath"].is_null());
}

#[test]
fn generate_writes_png_and_records_path() {
    let dir = tempfile::tempdir().unwrap();
    let uploads = UploadPolicy::with_dir(dir.path());
    let store = ArtworkStore::new();
    let a = store.create(form("Nike", "#22C55E", "follow-instagram").validate().unwrap());

    let out = store.generate(a.id, &Compositor::default(), &uploads).expect("generate");
    assert!(out.success);
    assert_eq!(out.artwork_id, a.id);
    assert!(out.image_path.starts_with(&format!("/uploads/generated-{}-", a.id)));

    let file = uploads.resolve(&out.image_path).unwrap();
    let bytes = std::fs::read(file).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
    assert_eq!(store.get(a.id).unwrap().generated_image_path, Some(out.image_path));
}

#[test]
fn generate_with_missing_logo_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let uploads = UploadPolicy::with_dir(dir.path());
    let store = ArtworkStore::new();
    let mut f = form("Nike", "#22C55E", "choose-proplayer");
    f.logo_path = Some("/uploads/gone.png".into());
    let a = store.create(f.validate().unwrap());

    let request = a.to_request(&uploads).unwrap();
    assert_eq!(request.logo.unwrap().path(), dir.path().join("gone.png"));
    assert!(store.generate(a.id, &Compositor::default(), &uploads).is_ok());
}

#[test]
fn generate_unknown_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtworkStore::new();
    let id = uuid::Uuid::new_v4();
    let err = store.generate(id, &Compositor::default(), &UploadPolicy::with_dir(dir.path())).unwrap_err();
    assert!(matches!(err, ArtError::NotFound(missing) if missing == id));
}

#[test]
fn logo_outside_uploads_fails_validation() {
    for path in ["/static/x.png", "https://cdn.example.com/logo.png", "/uploads/"] {
        let mut f = form("Nike", "#22C55E", "choose-proplayer");
        f.logo_path = Some(path.into());
        match f.validate() {
            Err(ArtError::Validation { field, .. }) => assert_eq!(field, "logoPath", "{path}"),
            other => panic!("{path}: expected logoPath error, got {other:?}"),
        }
    }
}

#[test]
fn stored_logo_outside_uploads_never_falls_back_to_wordmark() {
    let dir = tempfile::tempdir().unwrap();
    let uploads = UploadPolicy::with_dir(dir.path());
    let store = ArtworkStore::new();
    let a = store.create(form("Nike", "#22C55E", "choose-proplayer").validate().unwrap());
    let a = store
        .update(a.id, ArtworkPatch { logo_path: Some("/static/x.png".into()), ..Default::default() })
        .unwrap();

    assert!(matches!(a.to_request(&uploads), Err(ArtError::Validation { field: "logoPath", .. })));
    let err = store.generate(a.id, &Compositor::default(), &uploads).unwrap_err();
    assert!(matches!(err, ArtError::Validation { field: "logoPath", .. }));
    assert_eq!(store.get(a.id).unwrap().generated_image_path, None);
}

#[test]
fn recent_default_returns_ten_newest() {
    let store = ArtworkStore::new();
    for i in 0..12 {
        store.create(form(&format!("Co{i}"), "#22C55E", "follow-instagram").validate().unwrap());
    }
    let recent = store.recent_default();
    assert_eq!(recent.len(), art_core::store::DEFAULT_RECENT_LIMIT);
    assert_eq!(recent[0].company_name, "Co11");
    assert_eq!(recent[9].company_name, "Co2");
}
