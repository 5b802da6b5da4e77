//! Chat - View Component

use super::analysis_panel::AnalysisResults;
use super::model::{ask_visual_question, send_chat};
use super::view_model::{enter_sends, AttachedImage, ChatMessage, ChatVm, MessageBody, ResultsView, Role};
use crate::shared::dom::{first_dropped_file, first_selected_file, file_size, input_from_event, reset_input};
use crate::shared::icons::icon;
use crate::shared::notification::alert;
use crate::usecases::u501_document_upload::api::upload_document;
use crate::usecases::u503_evaluation::{EvaluationEvent, EvaluationUpload};
use crate::usecases::u504_download_results::DownloadButton;
use contracts::domain::a001_chat::{ChatRoute, CHAT_APOLOGY};
use contracts::shared::api::ApiOutcome;
use contracts::shared::upload_rules::{validate_document, validate_image, FileKind};
use contracts::usecases::u501_document_upload::AnalysisOption;
use contracts::usecases::u503_evaluation::EvaluationKind;
use leptos::prelude::*;
use thaw::*;
use web_sys::File;

#[component]
#[allow(non_snake_case)]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let image_input_ref = NodeRef::<leptos::html::Input>::new();

    on_cleanup(move || vm.release_image());

    // Keep the newest message in view
    Effect::new(move |_| {
        vm.messages.track();
        if let Some(container) = messages_container_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        let text = vm.input.get_untracked();
        let Some(route) = vm.session.with_untracked(|s| s.route(&text)) else {
            return;
        };
        vm.input.set(String::new());

        match route {
            ChatRoute::VisualQa { image, question } => {
                vm.push(ChatMessage::user(question.clone()));
                wasm_bindgen_futures::spawn_local(async move {
                    log::info!("🖼️ visual question: {}", question);
                    match ask_visual_question(&image.file, &question).await {
                        Ok(ApiOutcome::Success(answer)) => vm.push(ChatMessage::bot(answer.answer)),
                        Ok(ApiOutcome::Failure(failure)) => {
                            log::error!("❌ visual QA failed: {}", failure);
                            vm.push(ChatMessage::bot_error(format!("视觉问答失败：{}", failure)));
                        }
                        Err(e) => {
                            log::error!("❌ visual QA request failed: {}", e);
                            vm.push(ChatMessage::bot_error(CHAT_APOLOGY));
                        }
                    }
                });
            }
            ChatRoute::Text { message } => {
                vm.push(ChatMessage::user(message.clone()));
                wasm_bindgen_futures::spawn_local(async move {
                    log::info!("💬 chat: {}", message);
                    match send_chat(&message).await {
                        Ok(ApiOutcome::Success(response)) => {
                            vm.push(ChatMessage::bot(response.response));
                            if let Some(results) = response.results {
                                vm.results.set(Some(ResultsView::from_chat(&results, &message)));
                            }
                        }
                        Ok(ApiOutcome::Failure(failure)) => {
                            log::error!("❌ chat failed: {}", failure);
                            vm.push(ChatMessage::bot_error(CHAT_APOLOGY));
                        }
                        Err(e) => {
                            log::error!("❌ chat request failed: {}", e);
                            vm.push(ChatMessage::bot_error(CHAT_APOLOGY));
                        }
                    }
                });
            }
        }
    });

    let attach_image = move |file: File| {
        let mime = file.type_();
        let size = file_size(&file);
        if let Err(rejection) = validate_image(&mime, size) {
            log::warn!("⚠️ image '{}' rejected: {}", file.name(), rejection);
            alert(&rejection.to_string());
            return;
        }
        let image = match AttachedImage::new(file) {
            Ok(image) => image,
            Err(e) => {
                log::error!("❌ {}", e);
                return;
            }
        };
        match vm.session.try_update(|s| s.attach_image(image.clone(), &mime, size)) {
            Some(Ok(Some(previous))) => previous.revoke(),
            Some(Ok(None)) | None => {}
            Some(Err(rejection)) => {
                image.revoke();
                alert(&rejection.to_string());
            }
        }
    };

    let detach_image = move |_: web_sys::MouseEvent| vm.release_image();

    let toggle_visual_qa = move |_: web_sys::MouseEvent| match vm.session.try_update(|s| s.toggle_visual_qa()) {
        Some(Ok(enabled)) => log::info!("visual QA mode: {}", enabled),
        Some(Err(unavailable)) => alert(&unavailable.to_string()),
        None => {}
    };

    let upload_dropped_document = move |file: File| {
        let name = file.name();
        if let Err(rejection) = validate_document(&name, &file.type_()) {
            log::warn!("⚠️ document '{}' rejected: {}", name, rejection);
            alert(&rejection.to_string());
            return;
        }
        vm.push(ChatMessage::bot(format!("正在上传文件: {}...", name)));
        wasm_bindgen_futures::spawn_local(async move {
            match upload_document(&file, &AnalysisOption::ALL).await {
                Ok(ApiOutcome::Success(response)) => {
                    vm.push(ChatMessage::bot(format!("文件 {} 上传成功！", name)));
                    vm.results.set(Some(ResultsView::from_upload(&response.results)));
                    vm.downloads_ready.set(true);
                }
                Ok(ApiOutcome::Failure(failure)) => {
                    log::error!("❌ upload of '{}' failed: {}", name, failure);
                    vm.push(ChatMessage::bot_error(format!("文件上传失败：{}", failure)));
                }
                Err(e) => {
                    log::error!("❌ upload of '{}' failed: {}", name, e);
                    vm.push(ChatMessage::bot_error(format!("文件上传失败：{}", e)));
                }
            }
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        vm.drag_over.set(false);
        let Some(file) = first_dropped_file(&ev) else {
            return;
        };
        match FileKind::classify(&file.type_()) {
            FileKind::Image => attach_image(file),
            FileKind::Document => upload_dropped_document(file),
        }
    };

    let on_image_selected = move |ev: web_sys::Event| {
        let Some(input) = input_from_event(&ev) else {
            return;
        };
        if let Some(file) = first_selected_file(&input) {
            attach_image(file);
        }
        reset_input(&input);
    };

    let on_evaluation = Callback::new(move |event: EvaluationEvent| match event {
        EvaluationEvent::Started(kind) => vm.push(ChatMessage::bot(kind.progress_text())),
        EvaluationEvent::Finished { kind, metrics } => {
            vm.push(ChatMessage::evaluation(kind.title(), metrics.metric_lines()))
        }
        EvaluationEvent::Failed(text) => vm.push(ChatMessage::bot_error(text)),
    });

    view! {
        <div class="chat-page">
            <div
                class="chat-container"
                class:drag-over=move || vm.drag_over.get()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    vm.drag_over.set(true);
                }
                on:dragleave=move |_| vm.drag_over.set(false)
                on:drop=on_drop
            >
                <div class="chat-messages" node_ref=messages_container_ref>
                    <For
                        each=move || vm.messages.get()
                        key=|msg| msg.id
                        let:msg
                    >
                        {message_view(msg)}
                    </For>
                </div>

                {move || vm.preview_url().map(|url| view! {
                    <div class="image-preview">
                        <img src=url alt="图片预览" />
                        <button class="image-preview__remove" aria-label="移除图片" on:click=detach_image>
                            {icon("x")}
                        </button>
                    </div>
                })}

                <Flex align=FlexAlign::End style="gap: 8px;">
                    <input
                        type="file"
                        accept="image/*"
                        style="display: none;"
                        node_ref=image_input_ref
                        on:change=on_image_selected
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            if let Some(input) = image_input_ref.get_untracked() {
                                input.click();
                            }
                        }
                    >
                        {icon("image")}
                    </Button>

                    <div style="flex: 1;">
                        <Textarea
                            value=vm.input
                            placeholder="请输入您的问题... (Enter 发送, Shift+Enter 换行)"
                            attr:style="width: 100%; min-height: 48px; max-height: 160px; resize: vertical;"
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                // keyCode 229 covers engines that leave isComposing unset
                                let composing = ev.is_composing() || ev.key_code() == 229;
                                if enter_sends(&ev.key(), ev.shift_key(), composing) {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || !vm.has_image())
                        on_click=toggle_visual_qa
                    >
                        {move || if vm.visual_qa_enabled() { "退出视觉问答" } else { "视觉问答" }}
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_send.run(())
                    >
                        {icon("send")}
                        " 发送"
                    </Button>
                </Flex>
            </div>

            <aside class="chat-side">
                {move || {
                    vm.results
                        .get()
                        .filter(|results| !results.is_empty())
                        .map(|results| view! { <AnalysisResults results=results /> })
                }}

                <div class="evaluation-section">
                    <h4>"系统评估"</h4>
                    <EvaluationUpload kind=EvaluationKind::Qa on_event=on_evaluation />
                    <EvaluationUpload kind=EvaluationKind::Vqa on_event=on_evaluation />
                </div>

                <DownloadButton enabled=vm.downloads_ready />
            </aside>
        </div>
    }
}

fn message_view(msg: ChatMessage) -> impl IntoView {
    let class = match msg.role {
        Role::User => "message user-message",
        Role::Bot => "message bot-message",
    };
    let content = match msg.body {
        MessageBody::Text(text) => view! {
            <div class="message-content">{text}</div>
        }
        .into_any(),
        MessageBody::Error(text) => view! {
            <div class="message-content error">{text}</div>
        }
        .into_any(),
        MessageBody::Evaluation { title, lines } => view! {
            <div class="message-content">
                <div class="evaluation-results">
                    <h4>{title}</h4>
                    <ul>
                        {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        }
        .into_any(),
    };

    view! { <div class=class>{content}</div> }
}
