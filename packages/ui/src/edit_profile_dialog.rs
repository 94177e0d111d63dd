use dioxus::prelude::*;
use store::{feed, Profile, ProfileForm};

use crate::auth::use_auth;
use crate::backend::use_client;
use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::icons::FaUserPen;
use crate::modal_overlay::ModalOverlay;
use crate::toast::{described, use_toast};
use crate::Icon;

/// "Edit Profile" button plus its dialog. The current profile is fetched
/// each time the dialog opens.
#[component]
pub fn EditProfileDialog(on_profile_update: EventHandler<Profile>) -> Element {
    let client = use_client();
    let auth = use_auth();
    let toast = use_toast();
    let mut open = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut fields = use_signal(ProfileForm::default);

    let open_dialog = {
        let (client, auth) = (client.clone(), auth.clone());
        move |_: MouseEvent| {
            open.set(true);
            let (client, auth) = (client.clone(), auth.clone());
            spawn(async move {
                match feed::load_profile_form(&client, auth.user_id()).await {
                    Ok(loaded) => fields.set(loaded),
                    Err(e) => {
                        tracing::warn!("Loading profile failed: {}", e);
                        toast.error("Error loading profile".to_string(), described(e.to_string()));
                    }
                }
            });
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let (client, auth) = (client.clone(), auth.clone());
        spawn(async move {
            loading.set(true);
            match feed::save_profile(&client, auth.user_id(), fields()).await {
                Ok(profile) => {
                    tracing::info!("Saved profile for {}", profile.user_id);
                    on_profile_update.call(profile);
                    toast.success(
                        "Profile updated successfully! ✨".to_string(),
                        described("Your profile information has been saved."),
                    );
                    open.set(false);
                }
                Err(e) => {
                    tracing::warn!("Saving profile failed: {}", e);
                    toast.error("Failed to update profile".to_string(), described(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    let current = fields();

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            onclick: open_dialog,
            Icon { icon: FaUserPen, width: 14, height: 14 }
            "Edit Profile"
        }
        if open() {
            ModalOverlay {
                title: "Edit Profile",
                description: "Update your profile information. Click save when you're done.",
                on_close: move |_| open.set(false),
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: handle_submit,
                    div {
                        class: "flex flex-col gap-2",
                        Label { html_for: "display-name", "Display Name" }
                        Input {
                            id: "display-name",
                            placeholder: "Your display name",
                            value: current.display_name.clone(),
                            oninput: move |e: FormEvent| fields.write().display_name = e.value(),
                        }
                    }
                    div {
                        class: "flex flex-col gap-2",
                        Label { html_for: "bio", "Bio" }
                        Textarea {
                            id: "bio",
                            placeholder: "Tell us about yourself...",
                            value: current.bio.clone(),
                            rows: 3,
                            oninput: move |e: FormEvent| fields.write().bio = e.value(),
                        }
                    }
                    div {
                        class: "flex flex-col gap-2",
                        Label { html_for: "avatar-url", "Avatar URL" }
                        Input {
                            id: "avatar-url",
                            r#type: "url",
                            placeholder: "https://example.com/avatar.jpg",
                            value: current.avatar_url.clone(),
                            oninput: move |e: FormEvent| fields.write().avatar_url = e.value(),
                        }
                    }
                    div {
                        class: "flex justify-end gap-2",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: loading(),
                            onclick: move |_| open.set(false),
                            "Cancel"
                        }
                        Button {
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Saving..." } else { "Save changes" }
                        }
                    }
                }
            }
        }
    }
}
