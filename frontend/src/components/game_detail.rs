//! 游戏详情组件
//!
//! 由路由携带的 id 在内存列表中查找；点赞、收藏、分享链接和
//! 举报对话框都在这一页。找不到 id 时渲染占位而不是跳转。

use crate::api::WtgApi;
use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, ArrowUp, Flag, Share2, Star, StarFilled};
use crate::games::use_games;
use crate::web::router::use_router;
use crate::web::Dom;
use leptos::html::Dialog;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;
use wtg_shared::Game;

#[component]
pub fn GameDetailPage(id: String) -> impl IntoView {
    let games_ctx = use_games();
    let router = use_router();

    let lookup_id = id.clone();
    let game = move || games_ctx.game_by_id(&lookup_id);

    view! {
        <div class="w-full min-h-screen px-6 py-10 md:px-12">
            <div class="max-w-3xl mx-auto">
                <button
                    class="inline-flex items-center gap-2 text-base-content/40 hover:text-base-content transition-colors mb-8"
                    on:click=move |_| router.back()
                >
                    <ArrowLeft attr:class="h-4 w-4" />
                    "Back"
                </button>

                {move || {
                    if games_ctx.loading.get() {
                        return view! {
                            <div class="text-center py-24">
                                <span class="loading loading-spinner loading-lg"></span>
                            </div>
                        }
                        .into_any();
                    }
                    match game() {
                        Some(game) => view! { <GameDetailBody game=game /> }.into_any(),
                        None => view! {
                            <div class="text-center py-24 text-base-content/40 text-lg">
                                "Game not found"
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn GameDetailBody(game: Game) -> impl IntoView {
    let games_ctx = use_games();
    let auth = use_auth();

    // id 放进 StoredValue（Copy），各渲染闭包与事件处理器可以
    // 被任意多个消费方复制捕获
    let game_id = StoredValue::new(game.id.clone());

    let vote_count = move || game_id.with_value(|id| games_ctx.upvotes_for(id));
    let has_upvoted = move || game_id.with_value(|id| games_ctx.has_upvoted(id));
    let is_saved = move || game_id.with_value(|id| games_ctx.is_saved(id));

    let (link_copied, set_link_copied) = signal(false);
    let (report_reason, set_report_reason) = signal(String::new());
    let (report_sent, set_report_sent) = signal(false);
    let report_dialog: NodeRef<Dialog> = NodeRef::new();

    let on_upvote = move |_| games_ctx.toggle_upvote(&auth, game_id.get_value());
    let on_save = move |_| game_id.with_value(|id| games_ctx.toggle_saved(id));

    // 分享复制当前地址，提示三秒后消失
    let on_share = move |_| {
        if let Some(url) = Dom::current_url() {
            Dom::copy_to_clipboard(&url);
            set_link_copied.set(true);
            set_timeout(move || set_link_copied.set(false), Duration::from_secs(3));
        }
    };

    // 举报需要登录，匿名只打开登录模态框
    let on_open_report = move |_| {
        if !auth.is_logged_in_untracked() {
            auth.open_login_modal();
            return;
        }
        set_report_sent.set(false);
        set_report_reason.set(String::new());
        if let Some(dialog) = report_dialog.get() {
            let _ = dialog.show_modal();
        }
    };

    let on_close_report = move |_| {
        if let Some(dialog) = report_dialog.get() {
            dialog.close();
        }
    };

    let on_submit_report = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let game_id = game_id.get_value();
        let reason = report_reason.get_untracked();
        spawn_local(async move {
            match WtgApi::report_game(&game_id, &reason).await {
                Ok(()) => {
                    set_report_sent.set(true);
                    set_timeout(
                        move || {
                            if let Some(dialog) = report_dialog.get_untracked() {
                                dialog.close();
                            }
                        },
                        Duration::from_secs(2),
                    );
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to report: {e}").into());
                }
            }
        });
    };

    let summary_rows = [
        ("Type", game.game_type.label().to_string()),
        ("Age", game.age_rating.clone()),
        (
            "Players",
            format!("{}-{}", game.player_count.min, game.player_count.max),
        ),
        ("Duration", game.duration.clone()),
    ];

    view! {
        <article>
            <div class="card bg-base-100 shadow-xl p-10 text-center mb-8">
                <div class="text-8xl py-6">{game.emoji.clone()}</div>
                <h1 class="text-4xl font-semibold tracking-tight">{game.name.clone()}</h1>
                <p class="text-base-content/50 text-lg mt-4">{game.description.clone()}</p>

                <div class="flex items-center justify-center gap-3 mt-8">
                    <button
                        on:click=on_upvote
                        class=move || {
                            if has_upvoted() {
                                "btn btn-primary rounded-full gap-2"
                            } else {
                                "btn btn-ghost rounded-full gap-2 text-base-content/60"
                            }
                        }
                    >
                        <ArrowUp attr:class="h-4 w-4" />
                        <span>{vote_count}</span>
                    </button>
                    <button
                        on:click=on_save
                        class=move || {
                            if is_saved() {
                                "btn btn-ghost btn-circle text-warning"
                            } else {
                                "btn btn-ghost btn-circle text-base-content/40"
                            }
                        }
                        title="Save"
                    >
                        {move || if is_saved() {
                            view! { <StarFilled attr:class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Star attr:class="h-5 w-5" /> }.into_any()
                        }}
                    </button>
                    <button
                        on:click=on_share
                        class="btn btn-ghost btn-circle text-base-content/40"
                        title="Share"
                    >
                        <Share2 attr:class="h-5 w-5" />
                    </button>
                    <button
                        on:click=on_open_report
                        class="btn btn-ghost btn-circle text-base-content/40"
                        title="Report"
                    >
                        <Flag attr:class="h-5 w-5" />
                    </button>
                </div>

                <Show when=move || link_copied.get()>
                    <p class="text-success text-sm mt-4">"Link copied!"</p>
                </Show>
            </div>

            <div class="grid grid-cols-2 sm:grid-cols-4 gap-4 mb-8">
                {summary_rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="card bg-base-100 shadow p-5 text-center">
                                <p class="text-xs uppercase tracking-wider text-base-content/40">
                                    {label}
                                </p>
                                <p class="font-semibold mt-2">{value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when={
                let has_equipment = !game.equipment.is_empty();
                move || has_equipment
            }>
                <section class="card bg-base-100 shadow p-8 mb-8">
                    <h2 class="text-sm font-medium uppercase tracking-wider text-base-content/40 mb-4">
                        "Equipment"
                    </h2>
                    <ul class="list-disc list-inside space-y-1 text-base-content/80">
                        {game
                            .equipment
                            .iter()
                            .map(|item| view! { <li>{item.clone()}</li> })
                            .collect_view()}
                    </ul>
                </section>
            </Show>

            <Show when={
                let has_rules = !game.rules.is_empty();
                move || has_rules
            }>
                <section class="card bg-base-100 shadow p-8 mb-8">
                    <h2 class="text-sm font-medium uppercase tracking-wider text-base-content/40 mb-4">
                        "How to Play"
                    </h2>
                    <p class="text-base-content/80 whitespace-pre-line">{game.rules.clone()}</p>
                </section>
            </Show>

            <div class="flex items-center justify-between flex-wrap gap-4 mb-16">
                <div class="flex gap-2 flex-wrap">
                    {game
                        .themes
                        .iter()
                        .map(|theme| view! { <span class="badge badge-ghost">{theme.clone()}</span> })
                        .collect_view()}
                </div>
                <p class="text-base-content/40 text-sm">
                    "Added by " {game.contributor_name.clone()}
                </p>
            </div>

            <dialog node_ref=report_dialog class="modal">
                <div class="modal-box">
                    <h3 class="font-bold text-lg mb-2">"Report this game"</h3>
                    {move || if report_sent.get() {
                        view! {
                            <p class="text-success py-4">"Thanks, your report has been sent."</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <form on:submit=on_submit_report>
                                <p class="text-base-content/50 text-sm mb-4">
                                    "Tell us what's wrong with this entry."
                                </p>
                                <textarea
                                    class="textarea textarea-bordered w-full h-28"
                                    placeholder="Reason..."
                                    required
                                    on:input=move |ev| set_report_reason.set(event_target_value(&ev))
                                    prop:value=report_reason
                                ></textarea>
                                <div class="modal-action">
                                    <button type="button" class="btn btn-ghost" on:click=on_close_report>
                                        "Cancel"
                                    </button>
                                    <button type="submit" class="btn btn-error">
                                        "Report"
                                    </button>
                                </div>
                            </form>
                        }
                        .into_any()
                    }}
                </div>
            </dialog>
        </article>
    }
}
