use yew::prelude::*;

use crate::content::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub tags: Vec<AttrValue>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    html! {
        <div class="project-card">
            if let Some(src) = props.image.clone() {
                <img src={src} alt={props.title.clone()} loading="lazy" />
            }
            <div class="project-card-body">
                <h3>{ &props.title }</h3>
                <p>{ &props.description }</p>
                <div class="tag-list">
                    { for props.tags.iter().map(|tag| html! { <span class="tag">{ tag }</span> }) }
                </div>
            </div>
        </div>
    }
}

pub fn render_project(project: &Project) -> Html {
    html! {
        <ProjectCard
            title={project.title}
            description={project.description}
            tags={project.tags.iter().map(|t| AttrValue::from(*t)).collect::<Vec<_>>()}
            image={Some(AttrValue::from(project.image))}
        />
    }
}
